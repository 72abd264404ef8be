//! Locale registry and URL path utilities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::I18nError;

/// Supported locales
///
/// The set is closed. Adding a locale means adding a variant with its
/// metadata here and shipping a bundle under `locales/`. `pt` and `pt-BR`
/// overlap as code prefixes, which is why all code matching is exact and
/// path matching is full-segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English, the base locale every lookup falls back to
    #[serde(rename = "en")]
    English,
    /// German
    #[serde(rename = "de")]
    German,
    /// Spanish
    #[serde(rename = "es")]
    Spanish,
    /// French
    #[serde(rename = "fr")]
    French,
    /// Italian
    #[serde(rename = "it")]
    Italian,
    /// European Portuguese
    #[serde(rename = "pt")]
    Portuguese,
    /// Brazilian Portuguese
    #[serde(rename = "pt-BR")]
    BrazilianPortuguese,
    /// Japanese
    #[serde(rename = "ja")]
    Japanese,
    /// Simplified Chinese
    #[serde(rename = "zh")]
    Chinese,
    /// Arabic
    #[serde(rename = "ar")]
    Arabic,
}

/// Horizontal text direction of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right
    Ltr,
    /// Right to left
    Rtl,
}

/// Static metadata describing a locale
///
/// Pure pass-through data for the UI layer. Nothing here is computed from
/// the language; in particular direction and date format are declared, not
/// derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleConfig {
    /// English name of the language
    pub name: &'static str,
    /// Name of the language in the language itself
    pub native_name: &'static str,
    /// Text direction for layout
    pub direction: TextDirection,
    /// Date format pattern for display formatting
    pub date_format: &'static str,
}

const ALL_LOCALES: [Locale; 10] = [
    Locale::English,
    Locale::German,
    Locale::Spanish,
    Locale::French,
    Locale::Italian,
    Locale::Portuguese,
    Locale::BrazilianPortuguese,
    Locale::Japanese,
    Locale::Chinese,
    Locale::Arabic,
];

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

impl Locale {
    /// Get the language code for this locale
    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Italian => "it",
            Self::Portuguese => "pt",
            Self::BrazilianPortuguese => "pt-BR",
            Self::Japanese => "ja",
            Self::Chinese => "zh",
            Self::Arabic => "ar",
        }
    }

    /// Parse a locale from a language code. Exact match only; no case
    /// folding and no region collapsing.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "de" => Some(Self::German),
            "es" => Some(Self::Spanish),
            "fr" => Some(Self::French),
            "it" => Some(Self::Italian),
            "pt" => Some(Self::Portuguese),
            "pt-BR" => Some(Self::BrazilianPortuguese),
            "ja" => Some(Self::Japanese),
            "zh" => Some(Self::Chinese),
            "ar" => Some(Self::Arabic),
            _ => None,
        }
    }

    /// Whether a candidate code is a member of the supported set
    pub fn is_supported(code: &str) -> bool {
        Self::from_code(code).is_some()
    }

    /// All supported locales in registry order, base locale first
    pub const fn all() -> &'static [Self] {
        &ALL_LOCALES
    }

    /// Get the metadata for this locale
    pub const fn config(&self) -> LocaleConfig {
        match self {
            Self::English => LocaleConfig {
                name: "English",
                native_name: "English",
                direction: TextDirection::Ltr,
                date_format: "MM/dd/yyyy",
            },
            Self::German => LocaleConfig {
                name: "German",
                native_name: "Deutsch",
                direction: TextDirection::Ltr,
                date_format: "dd.MM.yyyy",
            },
            Self::Spanish => LocaleConfig {
                name: "Spanish",
                native_name: "Español",
                direction: TextDirection::Ltr,
                date_format: "dd/MM/yyyy",
            },
            Self::French => LocaleConfig {
                name: "French",
                native_name: "Français",
                direction: TextDirection::Ltr,
                date_format: "dd/MM/yyyy",
            },
            Self::Italian => LocaleConfig {
                name: "Italian",
                native_name: "Italiano",
                direction: TextDirection::Ltr,
                date_format: "dd/MM/yyyy",
            },
            Self::Portuguese => LocaleConfig {
                name: "Portuguese",
                native_name: "Português",
                direction: TextDirection::Ltr,
                date_format: "dd/MM/yyyy",
            },
            Self::BrazilianPortuguese => LocaleConfig {
                name: "Brazilian Portuguese",
                native_name: "Português (Brasil)",
                direction: TextDirection::Ltr,
                date_format: "dd/MM/yyyy",
            },
            Self::Japanese => LocaleConfig {
                name: "Japanese",
                native_name: "日本語",
                direction: TextDirection::Ltr,
                date_format: "yyyy/MM/dd",
            },
            Self::Chinese => LocaleConfig {
                name: "Chinese",
                native_name: "中文",
                direction: TextDirection::Ltr,
                date_format: "yyyy-MM-dd",
            },
            Self::Arabic => LocaleConfig {
                name: "Arabic",
                native_name: "العربية",
                direction: TextDirection::Rtl,
                date_format: "dd/MM/yyyy",
            },
        }
    }

    /// Get the English name for this locale
    pub const fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native display name for this locale
    pub const fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the text direction for this locale
    pub const fn direction(&self) -> TextDirection {
        self.config().direction
    }

    /// Whether this locale lays text out right to left
    pub const fn is_rtl(&self) -> bool {
        matches!(self.config().direction, TextDirection::Rtl)
    }

    /// Get the date format pattern for this locale
    pub const fn date_format(&self) -> &'static str {
        self.config().date_format
    }

    /// Get the bundle file name for this locale
    pub fn bundle_file(&self) -> String {
        format!("{}.json", self.code())
    }

    /// Extract the locale from the leading segment of a URL path.
    ///
    /// Only a full segment counts: `/pt-BR/merge` is Brazilian Portuguese,
    /// while `/portfolio` carries no locale even though it starts with
    /// `pt`. Paths whose first segment is not a supported code carry no
    /// locale at all.
    pub fn from_path(path: &str) -> Option<Self> {
        let first = path.split('/').find(|segment| !segment.is_empty())?;
        Self::from_code(first)
    }

    /// Prefix a URL path with this locale's segment.
    ///
    /// An existing leading locale segment is replaced, missing or repeated
    /// leading slashes are normalized, and the rest of the path is kept
    /// verbatim. For every path `p`, `Locale::from_path(&l.localize_path(p))`
    /// recovers `l`.
    pub fn localize_path(&self, path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        let rest = match trimmed.split_once('/') {
            Some((first, tail)) if Self::is_supported(first) => tail.trim_start_matches('/'),
            None if Self::is_supported(trimmed) => "",
            _ => trimmed,
        };
        if rest.is_empty() {
            format!("/{}", self.code())
        } else {
            format!("/{}/{}", self.code(), rest)
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}
