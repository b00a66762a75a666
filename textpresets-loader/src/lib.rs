//! Preset loading with localization enrichment.
//!
//! This crate turns the bundled preset document into a fully localized
//! [`PresetData`] snapshot.
//!
//! # Key Components
//!
//! * [`provider::LocalizationProvider`] - capability trait supplying raw
//!   assets and localized strings
//! * [`bundle::FsBundle`] - filesystem-backed provider implementation
//! * [`loader::PresetLoader`] - decodes the document and attaches one
//!   localized string per language code to every record
//!
//! ```no_run
//! use textpresets_loader::{FsBundle, PresetLoader};
//!
//! let bundle = FsBundle::open("/usr/share/textpresets");
//! let loader = PresetLoader::new(bundle);
//! if let Some(presets) = loader.load().expect("invalid preset document") {
//!     for category in presets.visible_categories() {
//!         println!("{}", category.localized_name["en"]);
//!     }
//! }
//! ```

pub mod bundle;
pub mod loader;
pub mod provider;

pub use bundle::FsBundle;
pub use loader::PresetLoader;
pub use provider::LocalizationProvider;
pub use textpresets_shared::{PresetCategory, PresetData, PresetPhrase};
