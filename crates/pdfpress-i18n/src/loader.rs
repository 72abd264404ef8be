//! Bundle loading with a single-flight cache

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use tracing::{debug, error, info, warn};

use crate::error::{I18nError, I18nResult};
use crate::locale::Locale;
use crate::tree::MessageTree;

type BundleCell = Arc<OnceCell<Arc<MessageTree>>>;

/// Loads and caches one resource bundle per locale.
///
/// The first request for a locale reads `<base_dir>/<code>.json` and
/// publishes the parsed tree; the same `Arc` is handed out for the rest of
/// the process. Failed loads are not cached, so a later call can retry
/// after the filesystem is fixed.
#[derive(Debug)]
pub struct BundleLoader {
    /// Base directory for locale bundles
    base_dir: PathBuf,
    /// One cell per locale; the cell serializes concurrent first loads
    cells: Mutex<HashMap<Locale, BundleCell>>,
}

impl BundleLoader {
    /// Create a loader rooted at the given bundle directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            cells: Mutex::new(HashMap::new()),
        }
    }

    /// Load the bundle for a locale, reading the file at most once.
    ///
    /// Concurrent first loads collapse into a single read; every caller
    /// observes the same published tree. The loader never substitutes
    /// another locale, that is the fallback resolver's job.
    pub fn load(&self, locale: Locale) -> I18nResult<Arc<MessageTree>> {
        self.cell(locale)
            .get_or_try_init(|| self.read_bundle(locale))
            .map(Arc::clone)
    }

    /// Whether a bundle is cached for the given locale
    pub fn is_loaded(&self, locale: Locale) -> bool {
        let cells = self.cells.lock().unwrap();
        cells.get(&locale).is_some_and(|cell| cell.get().is_some())
    }

    /// Drop the cached bundle for a locale; the next load re-reads it
    pub fn invalidate(&self, locale: Locale) {
        let mut cells = self.cells.lock().unwrap();
        if cells.remove(&locale).is_some() {
            info!("Invalidated cached bundle for locale: {}", locale);
        }
    }

    /// Drop every cached bundle
    pub fn clear(&self) {
        let mut cells = self.cells.lock().unwrap();
        cells.clear();
        info!("Cleared bundle cache");
    }

    /// Get the base directory bundles are read from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn cell(&self, locale: Locale) -> BundleCell {
        let mut cells = self.cells.lock().unwrap();
        Arc::clone(cells.entry(locale).or_default())
    }

    fn read_bundle(&self, locale: Locale) -> I18nResult<Arc<MessageTree>> {
        let bundle_path = self.base_dir.join(locale.bundle_file());

        debug!("Loading resource bundle: {:?}", bundle_path);

        let content = fs::read_to_string(&bundle_path).map_err(|source| {
            warn!("Failed to read resource bundle: {:?}", bundle_path);
            I18nError::ResourceLoad {
                path: bundle_path.to_string_lossy().to_string(),
                source,
            }
        })?;

        let tree = MessageTree::from_json(&content).map_err(|source| {
            error!("Malformed resource bundle {:?}: {}", bundle_path, source);
            I18nError::MalformedBundle {
                path: bundle_path.to_string_lossy().to_string(),
                source,
            }
        })?;

        info!("Loaded resource bundle for locale: {}", locale);
        Ok(Arc::new(tree))
    }
}

impl Default for BundleLoader {
    fn default() -> Self {
        Self::new("locales")
    }
}
