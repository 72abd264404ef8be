//! Locale fallback and merged-tree resolution

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use once_cell::sync::OnceCell;
use pdfpress_common::ErrorCode;
use tracing::{debug, info, warn};

use crate::loader::BundleLoader;
use crate::locale::Locale;
use crate::translator::Translator;
use crate::tree::MessageTree;

type MergedCell = Arc<OnceCell<Arc<MessageTree>>>;

/// Resolves messages with locale fallback.
///
/// Every lookup reads a merged tree: the requested locale's bundle laid
/// over the default locale's bundle. A bundle that fails to load degrades
/// to the next tier instead of failing the lookup, so resolution itself is
/// infallible.
#[derive(Debug)]
pub struct I18nManager {
    /// Locale whose bundle backs every merged tree
    default_locale: Locale,
    /// Loader shared by all lookups
    loader: BundleLoader,
    /// Merged tree per locale, built on first use
    merged: Mutex<HashMap<Locale, MergedCell>>,
}

impl I18nManager {
    /// Create a manager reading bundles from `locales_dir`, falling back
    /// to English
    pub fn new<P: AsRef<Path>>(locales_dir: P) -> Self {
        Self::with_default_locale(Locale::default(), locales_dir)
    }

    /// Create a manager with an explicit default locale
    pub fn with_default_locale<P: AsRef<Path>>(default_locale: Locale, locales_dir: P) -> Self {
        info!(
            "I18nManager initialized with default locale: {}",
            default_locale
        );
        Self {
            default_locale,
            loader: BundleLoader::new(locales_dir),
            merged: Mutex::new(HashMap::new()),
        }
    }

    /// The merged message tree for a locale.
    ///
    /// Infallible: a locale whose bundle cannot load degrades to the
    /// default locale's tree, and a missing default bundle degrades to an
    /// empty tree. The result is cached until invalidated.
    pub fn merged_tree(&self, locale: Locale) -> Arc<MessageTree> {
        let cell = self.merged_cell(locale);
        Arc::clone(cell.get_or_init(|| self.build_merged_tree(locale)))
    }

    /// Get a translator bound to the locale's merged tree
    pub fn translator(&self, locale: Locale) -> Translator {
        Translator::new(self.merged_tree(locale))
    }

    /// Resolve a key for a locale through the fallback tiers.
    ///
    /// Returns the key itself when nothing resolves. Never fails.
    pub fn resolve_with_fallback(&self, locale: Locale, key: &str) -> String {
        self.translator(locale).translate(key)
    }

    /// Resolve a key, using `default` when nothing resolves
    pub fn resolve_or(&self, locale: Locale, key: &str, default: &str) -> String {
        let translator = self.translator(locale);
        if translator.has_message(key) {
            translator.translate(key)
        } else {
            warn!("Message '{}' not found, using default: '{}'", key, default);
            default.to_string()
        }
    }

    /// The user-facing message for a pipeline error code.
    ///
    /// Resolves the code's translation key through the merged tree, then
    /// falls back to the code's built-in English message. Error messages
    /// carry no placeholders and need no interpolation.
    pub fn error_message(&self, locale: Locale, code: ErrorCode) -> String {
        self.resolve_or(locale, code.message_key(), &code.default_message())
    }

    /// Whether the locale's merged tree resolves the key
    pub fn has_message(&self, locale: Locale, key: &str) -> bool {
        self.translator(locale).has_message(key)
    }

    /// Get the default locale
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Whether the raw bundle for a locale is cached
    pub fn is_loaded(&self, locale: Locale) -> bool {
        self.loader.is_loaded(locale)
    }

    /// Drop the cached data for a locale; the next lookup reloads it.
    ///
    /// Invalidating the default locale drops every merged tree, since each
    /// of them embeds the default bundle.
    pub fn invalidate(&self, locale: Locale) {
        self.loader.invalidate(locale);
        if locale == self.default_locale {
            self.merged.lock().unwrap().clear();
        } else {
            self.merged.lock().unwrap().remove(&locale);
        }
        info!("Invalidated locale: {}", locale);
    }

    /// Drop every cached bundle and merged tree
    pub fn invalidate_all(&self) {
        self.loader.clear();
        self.merged.lock().unwrap().clear();
        info!("Invalidated all locales");
    }

    fn merged_cell(&self, locale: Locale) -> MergedCell {
        let mut merged = self.merged.lock().unwrap();
        Arc::clone(merged.entry(locale).or_default())
    }

    fn build_merged_tree(&self, locale: Locale) -> Arc<MessageTree> {
        let base = match self.loader.load(self.default_locale) {
            Ok(tree) => tree,
            Err(error) => {
                warn!("Default locale bundle unavailable: {}", error);
                Arc::new(MessageTree::default())
            }
        };

        if locale == self.default_locale {
            return base;
        }

        match self.loader.load(locale) {
            Ok(tree) => {
                debug!(
                    "Merging bundle for locale {} over {}",
                    locale, self.default_locale
                );
                Arc::new(tree.merged_over(&base))
            }
            Err(error) => {
                warn!(
                    "Bundle for locale {} unavailable, serving {}: {}",
                    locale, self.default_locale, error
                );
                base
            }
        }
    }
}
