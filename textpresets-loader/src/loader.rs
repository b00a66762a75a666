//! Preset Loader - decodes the bundled preset document and attaches
//! localized strings.
//!
//! The loader asks its [`LocalizationProvider`] for the raw `presets.json`
//! asset, decodes it, then fills every record's localization map with one
//! entry per available language code. A missing asset is an expected
//! outcome and yields `Ok(None)`; a document that fails to decode is an
//! error in strict mode and `Ok(None)` in lenient mode.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use textpresets_shared::PresetData;
use textpresets_shared::errors::PresetError;
use textpresets_shared::preset_json::parse_presets;

use crate::provider::LocalizationProvider;

/// Canonical name of the bundled preset document
pub const PRESET_ASSET_NAME: &str = "presets.json";

/// Loads the preset document through a [`LocalizationProvider`] and
/// enriches it with localized strings.
///
/// Every call to [`load`](PresetLoader::load) re-reads and re-decodes the
/// document; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct PresetLoader<P> {
    provider: P,
    asset_name: String,
    strict: bool,
}

impl<P: LocalizationProvider> PresetLoader<P> {
    /// Create a loader for the canonical `presets.json` asset.
    ///
    /// Strict mode defaults to on in debug builds (including `cargo test`)
    /// and off in release builds, so schema drift fails loudly during
    /// development without crashing production callers.
    pub fn new(provider: P) -> Self {
        Self::with_asset(provider, PRESET_ASSET_NAME)
    }

    /// Create a loader that reads an alternate asset name.
    pub fn with_asset(provider: P, asset_name: impl Into<String>) -> Self {
        Self {
            provider,
            asset_name: asset_name.into(),
            strict: cfg!(debug_assertions),
        }
    }

    /// Whether decode failures are propagated as errors.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Set whether decode failures are propagated as errors (`true`) or
    /// swallowed into an empty result (`false`).
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Name of the asset this loader reads.
    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    /// Load and localize the preset document.
    ///
    /// Returns `Ok(None)` when the provider has no asset with the
    /// configured name, or when decoding fails in lenient mode. A `Some`
    /// result is always fully populated: every category and phrase carries
    /// one localized string per available language code.
    pub fn load(&self) -> Result<Option<PresetData>, PresetError> {
        let Some(bytes) = self.provider.load_asset(&self.asset_name) else {
            debug!(
                "Preset asset '{}' not found, no presets to load",
                self.asset_name
            );
            return Ok(None);
        };

        let data = match parse_presets(&bytes) {
            Ok(data) => data,
            Err(e) if self.strict => return Err(e),
            Err(e) => {
                warn!("Failed to decode preset asset '{}': {}", self.asset_name, e);
                return Ok(None);
            }
        };

        let languages = self.provider.available_language_codes();
        debug!(
            "Localizing {} categories and {} phrases for {} languages",
            data.categories.len(),
            data.phrases.len(),
            languages.len()
        );

        let categories = data
            .categories
            .into_iter()
            .map(|mut category| {
                category.localized_name = self.localizations_for(&category.id, &languages);
                category
            })
            .collect::<Vec<_>>();

        let phrases = data
            .phrases
            .into_iter()
            .map(|mut phrase| {
                phrase.localized_utterance = self.localizations_for(&phrase.id, &languages);
                phrase
            })
            .collect::<Vec<_>>();

        info!(
            "Loaded {} categories and {} phrases from '{}'",
            categories.len(),
            phrases.len(),
            self.asset_name
        );

        Ok(Some(PresetData {
            schema_version: data.schema_version,
            categories,
            phrases,
        }))
    }

    /// One localized string per language code for the given lookup key.
    fn localizations_for(&self, key: &str, languages: &[String]) -> HashMap<String, String> {
        languages
            .iter()
            .map(|code| (code.clone(), self.provider.localized_string(key, code)))
            .collect()
    }
}
