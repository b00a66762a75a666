//! Filesystem resource bundle - assets plus per-language string tables.
//!
//! A bundle is a directory with assets at the root and one flat JSON
//! translation table per language under `strings/`:
//!
//! ```text
//! <root>/presets.json
//! <root>/strings/en.json      { "phrase.hello": "Hello" }
//! <root>/strings/fr.json      { "phrase.hello": "Bonjour" }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::provider::LocalizationProvider;

/// Default system bundle directory (installed via package)
pub const SYSTEM_BUNDLE_DIR: &str = "/usr/share/textpresets";

/// Default user bundle directory
pub const USER_BUNDLE_DIR: &str = ".config/textpresets";

/// Subdirectory holding the per-language translation tables
const STRINGS_DIR: &str = "strings";

/// Filesystem-backed [`LocalizationProvider`].
///
/// Translation tables are read once when the bundle is opened; asset reads
/// go to disk on every call.
#[derive(Debug, Clone)]
pub struct FsBundle {
    root: PathBuf,
    tables: HashMap<String, HashMap<String, String>>,
}

impl FsBundle {
    /// Open the bundle rooted at `root`.
    ///
    /// A missing `strings/` directory yields a bundle with no languages. A
    /// table file that cannot be read or parsed is skipped; the remaining
    /// tables still load.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let tables = match read_tables(&root.join(STRINGS_DIR)) {
            Ok(tables) => tables,
            Err(e) => {
                debug!("No translation tables under {:?}: {}", root, e);
                HashMap::new()
            }
        };
        debug!(
            "Opened bundle at {:?} with {} languages",
            root,
            tables.len()
        );
        Self { root, tables }
    }

    /// Probe the conventional bundle locations and open the first that
    /// exists.
    ///
    /// Locations, in priority order:
    /// 1. Local: `./textpresets`
    /// 2. User: `~/.config/textpresets`
    /// 3. System: `/usr/share/textpresets`
    pub fn discover() -> Option<Self> {
        for dir in Self::search_paths() {
            if dir.is_dir() {
                return Some(Self::open(dir));
            }
            debug!("Bundle directory does not exist, skipping: {:?}", dir);
        }
        None
    }

    /// Candidate bundle directories checked by [`FsBundle::discover`].
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./textpresets")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(USER_BUNDLE_DIR));
        }
        paths.push(PathBuf::from(SYSTEM_BUNDLE_DIR));
        paths
    }

    /// Root directory of this bundle.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Read every `<code>.json` translation table under `dir`.
fn read_tables(dir: &Path) -> Result<HashMap<String, HashMap<String, String>>> {
    let mut tables = HashMap::new();

    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory entry in {:?}", dir))?;
        let path = entry.path();

        // Only process .json files
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        match read_table(&path) {
            Ok(table) => {
                debug!("Loaded {} translations for '{}'", table.len(), code);
                tables.insert(code.to_string(), table);
            }
            Err(e) => {
                warn!("Failed to load translation table from {:?}: {}", path, e);
            }
        }
    }

    Ok(tables)
}

/// Read a single flat translation table.
fn read_table(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse table file: {:?}", path))
}

impl LocalizationProvider for FsBundle {
    fn available_language_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.tables.keys().cloned().collect();
        codes.sort();
        codes
    }

    fn localized_string(&self, key: &str, language_code: &str) -> String {
        self.tables
            .get(language_code)
            .and_then(|table| table.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn load_asset(&self, name: &str) -> Option<Vec<u8>> {
        fs::read(self.root.join(name)).ok()
    }
}
