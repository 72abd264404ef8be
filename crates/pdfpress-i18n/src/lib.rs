//! Translation resolution and fallback for the PdfPress web application
//!
//! This crate guarantees that every text lookup produces something usable,
//! for every supported locale, no matter how incomplete the translation
//! files are. It includes:
//!
//! - A closed locale registry with URL path helpers
//! - Nested message trees with dot-path resolution
//! - Single-flight bundle loading with explicit cache invalidation
//! - Locale-over-default merging so partial translations degrade gracefully
//! - `{{name}}` placeholder interpolation
//! - Registry-backed error messages that can never be blank
//!
//! # Example
//!
//! ```rust
//! use pdfpress_i18n::{I18nManager, Locale};
//!
//! # fn example() {
//! let manager = I18nManager::new("locales");
//! let translator = manager.translator(Locale::German);
//!
//! let title = translator.translate("tools.compress.title");
//! println!("{}", title);
//! # }
//! ```

pub mod error;
pub mod fallback;
pub mod loader;
pub mod locale;
pub mod translator;
pub mod tree;

pub use error::{I18nError, I18nResult};
pub use fallback::I18nManager;
pub use loader::BundleLoader;
pub use locale::{Locale, LocaleConfig, TextDirection};
pub use translator::Translator;
pub use tree::MessageTree;

// Re-export so callers can map pipeline errors without another import
pub use pdfpress_common::ErrorCode;
