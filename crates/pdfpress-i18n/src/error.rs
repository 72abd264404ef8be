//! Error types for localization operations

use thiserror::Error;

/// Errors that can occur while loading resource bundles
///
/// Missing translations are not errors; they are handled by the fallback
/// tiers and surface as placeholder text, never as an `Err`.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Bundle file is absent or could not be read
    #[error("Failed to load resource bundle: {path}")]
    ResourceLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bundle file violates the structural contract
    #[error("Malformed resource bundle: {path}")]
    MalformedBundle {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Locale code outside the supported set
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
