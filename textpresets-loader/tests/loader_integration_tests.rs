//! Integration tests for filesystem-backed preset loading.
//!
//! These tests build a bundle directory on disk and run the full decode +
//! localization pipeline against it.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use textpresets_loader::{FsBundle, LocalizationProvider, PresetLoader};
use textpresets_shared::preset_json::parse_presets_file;

const DOCUMENT: &str = r#"
{
    "schemaVersion": 1,
    "categories": [
        { "id": "category.general", "hidden": false },
        { "id": "category.environment", "hidden": true }
    ],
    "phrases": [
        { "id": "phrase.hello", "categoryIds": ["category.general"] },
        { "id": "phrase.thanks", "categoryIds": ["category.general"] },
        { "id": "phrase.lights_on", "categoryIds": ["category.environment"] }
    ]
}
"#;

/// Write a complete bundle: preset document plus en/fr translation tables.
fn create_test_bundle(root: &Path) {
    fs::write(root.join("presets.json"), DOCUMENT).unwrap();

    let strings = root.join("strings");
    fs::create_dir_all(&strings).unwrap();
    fs::write(
        strings.join("en.json"),
        r#"{
            "category.general": "General",
            "phrase.hello": "Hello",
            "phrase.thanks": "Thank you"
        }"#,
    )
    .unwrap();
    fs::write(
        strings.join("fr.json"),
        r#"{
            "category.general": "Général",
            "phrase.hello": "Bonjour"
        }"#,
    )
    .unwrap();
}

#[test]
fn test_full_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    create_test_bundle(temp_dir.path());

    let loader = PresetLoader::new(FsBundle::open(temp_dir.path()));
    let data = loader.load().unwrap().unwrap();

    // Counts and order survive the round trip
    assert_eq!(data.categories.len(), 2);
    assert_eq!(data.phrases.len(), 3);
    assert_eq!(data.categories[0].id, "category.general");
    assert_eq!(data.phrases[2].id, "phrase.lights_on");

    // Registered translations are attached per language
    let hello = data.phrase("phrase.hello").unwrap();
    assert_eq!(hello.localized_utterance["en"], "Hello");
    assert_eq!(hello.localized_utterance["fr"], "Bonjour");

    let general = data.category("category.general").unwrap();
    assert_eq!(general.localized_name["en"], "General");
    assert_eq!(general.localized_name["fr"], "Général");
}

#[test]
fn test_every_record_covers_every_language() {
    let temp_dir = TempDir::new().unwrap();
    create_test_bundle(temp_dir.path());

    let bundle = FsBundle::open(temp_dir.path());
    let languages = bundle.available_language_codes();
    assert_eq!(languages, vec!["en", "fr"]);

    let data = PresetLoader::new(bundle).load().unwrap().unwrap();
    for category in &data.categories {
        for code in &languages {
            assert!(category.localized_name.contains_key(code));
        }
    }
    for phrase in &data.phrases {
        for code in &languages {
            assert!(phrase.localized_utterance.contains_key(code));
        }
    }
}

#[test]
fn test_untranslated_records_fall_back_to_key() {
    let temp_dir = TempDir::new().unwrap();
    create_test_bundle(temp_dir.path());

    let loader = PresetLoader::new(FsBundle::open(temp_dir.path()));
    let data = loader.load().unwrap().unwrap();

    // No table registers these ids, so the lookup key comes back unchanged
    let lights = data.phrase("phrase.lights_on").unwrap();
    assert_eq!(lights.localized_utterance["en"], "phrase.lights_on");
    assert_eq!(lights.localized_utterance["fr"], "phrase.lights_on");

    // fr.json has no entry for phrase.thanks
    let thanks = data.phrase("phrase.thanks").unwrap();
    assert_eq!(thanks.localized_utterance["en"], "Thank you");
    assert_eq!(thanks.localized_utterance["fr"], "phrase.thanks");
}

#[test]
fn test_missing_asset_yields_no_presets() {
    let temp_dir = TempDir::new().unwrap();
    // Bundle directory exists but holds no preset document

    let loader = PresetLoader::new(FsBundle::open(temp_dir.path()));
    assert!(loader.load().unwrap().is_none());
}

#[test]
fn test_malformed_document_strict_and_lenient() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("presets.json"),
        r#"{ "schemaVersion": 1, "categories": "not-an-array", "phrases": [] }"#,
    )
    .unwrap();

    let mut loader = PresetLoader::new(FsBundle::open(temp_dir.path()));
    loader.set_strict(true);
    assert!(loader.load().is_err());

    loader.set_strict(false);
    assert!(loader.load().unwrap().is_none());
}

#[test]
fn test_load_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    create_test_bundle(temp_dir.path());

    let loader = PresetLoader::new(FsBundle::open(temp_dir.path()));
    let first = loader.load().unwrap().unwrap();
    let second = loader.load().unwrap().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_bundle_without_translations_still_loads() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("presets.json"), DOCUMENT).unwrap();

    let loader = PresetLoader::new(FsBundle::open(temp_dir.path()));
    let data = loader.load().unwrap().unwrap();
    assert_eq!(data.phrases.len(), 3);
    assert!(data.phrases[0].localized_utterance.is_empty());
}

#[test]
fn test_visible_categories_after_load() {
    let temp_dir = TempDir::new().unwrap();
    create_test_bundle(temp_dir.path());

    let loader = PresetLoader::new(FsBundle::open(temp_dir.path()));
    let data = loader.load().unwrap().unwrap();

    let visible: Vec<_> = data.visible_categories().map(|c| c.id.as_str()).collect();
    assert_eq!(visible, vec!["category.general"]);

    let general_phrases = data.phrases_in_category("category.general");
    assert_eq!(general_phrases.len(), 2);
}

#[test]
fn test_document_parses_directly_from_file() {
    let temp_dir = TempDir::new().unwrap();
    create_test_bundle(temp_dir.path());

    let data = parse_presets_file(&temp_dir.path().join("presets.json")).unwrap();
    assert_eq!(data.categories.len(), 2);
    assert!(data.categories[0].localized_name.is_empty());
}

#[test]
fn test_alternate_asset_name_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("textpresets.json"), DOCUMENT).unwrap();

    let bundle = FsBundle::open(temp_dir.path());
    let loader = PresetLoader::with_asset(bundle, "textpresets.json");
    assert!(loader.load().unwrap().is_some());
}
