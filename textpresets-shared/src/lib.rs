//! Shared preset data model for textpresets.
//!
//! This crate contains the typed representation of the bundled preset
//! document and the JSON decoding that produces it. A preset document is a
//! single JSON asset describing text categories and phrases:
//!
//! ```json
//! {
//!     "schemaVersion": 1,
//!     "categories": [ { "id": "category.general", "hidden": false } ],
//!     "phrases": [ { "id": "phrase.hello", "categoryIds": ["category.general"] } ]
//! }
//! ```
//!
//! # Key Components
//!
//! * [`PresetData`] - Top-level document: schema version, categories, phrases
//! * [`PresetCategory`] / [`PresetPhrase`] - Individual preset records
//! * [`preset_json`] - Decoding functions with schema version enforcement
//! * [`errors`] - Error types shared across the workspace
//!
//! The localization maps on the records are empty as decoded; the loader
//! crate fills them with one entry per available language code.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod errors;
pub mod preset_json;

/// The preset document format version this crate understands.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// Top-level preset document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetData {
    /// Format version tag, checked against [`SUPPORTED_SCHEMA_VERSION`] on decode
    pub schema_version: u32,
    /// Preset categories in document order
    pub categories: Vec<PresetCategory>,
    /// Preset phrases in document order
    pub phrases: Vec<PresetPhrase>,
}

/// A category of preset phrases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetCategory {
    /// Unique identifier, also the localization lookup key
    pub id: String,
    /// Whether the category is suppressed from display
    pub hidden: bool,
    /// Language code -> localized display name (filled in after decode)
    #[serde(default)]
    pub localized_name: HashMap<String, String>,
}

/// A single preset phrase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetPhrase {
    /// Unique identifier, also the localization lookup key
    pub id: String,
    /// Ids of the categories this phrase belongs to, in document order.
    /// Membership is not validated against the category list.
    pub category_ids: Vec<String>,
    /// Language code -> localized utterance text (filled in after decode)
    #[serde(default)]
    pub localized_utterance: HashMap<String, String>,
}

impl PresetData {
    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&PresetCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a phrase by id.
    pub fn phrase(&self, id: &str) -> Option<&PresetPhrase> {
        self.phrases.iter().find(|p| p.id == id)
    }

    /// Categories that are not hidden, in document order.
    pub fn visible_categories(&self) -> impl Iterator<Item = &PresetCategory> {
        self.categories.iter().filter(|c| !c.hidden)
    }

    /// Phrases that list the given category id, in document order.
    pub fn phrases_in_category(&self, category_id: &str) -> Vec<&PresetPhrase> {
        self.phrases
            .iter()
            .filter(|p| p.category_ids.iter().any(|c| c == category_id))
            .collect()
    }
}
