//! Localization capability consumed by the preset loader.

/// Source of bundled assets and localized strings.
///
/// Implementations supply the raw preset document plus translated strings
/// keyed by record id. [`FsBundle`](crate::bundle::FsBundle) is the
/// filesystem-backed implementation; tests typically use small in-memory
/// ones. The loader takes its provider as an explicit argument, so any
/// implementation can be swapped in.
pub trait LocalizationProvider: Send + Sync {
    /// Language codes this provider can translate into.
    ///
    /// Codes are unique, and stable across calls for an unchanged provider.
    fn available_language_codes(&self) -> Vec<String>;

    /// Localized string for `key` in the given language.
    ///
    /// Returns the key itself when no translation is registered. A missing
    /// translation is defined fallback behavior, not an error.
    fn localized_string(&self, key: &str, language_code: &str) -> String;

    /// Raw bytes of the named bundled asset, or `None` when the asset
    /// cannot be located.
    fn load_asset(&self, name: &str) -> Option<Vec<u8>>;
}
