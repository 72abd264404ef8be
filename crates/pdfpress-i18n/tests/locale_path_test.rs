//! Tests for the locale registry and URL path handling.
//!
//! This test suite covers:
//! - Exact membership of the closed locale set
//! - Metadata totality (names, direction, date formats)
//! - Full-segment path extraction, including the pt / pt-BR prefix trap
//! - Path injection and its round-trip with extraction

use std::str::FromStr;

use pdfpress_i18n::{I18nError, Locale, TextDirection};

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn test_registry_has_ten_locales_base_first() {
        let all = Locale::all();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0], Locale::English);
        assert!(all.contains(&Locale::BrazilianPortuguese));
        assert!(all.contains(&Locale::Arabic));
    }

    #[test]
    fn test_codes_round_trip() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(*locale));
        }
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Locale::from_code("pt"), Some(Locale::Portuguese));
        assert_eq!(Locale::from_code("pt-BR"), Some(Locale::BrazilianPortuguese));

        // No case folding, no region collapsing, no trimming
        assert_eq!(Locale::from_code("PT"), None);
        assert_eq!(Locale::from_code("pt-br"), None);
        assert_eq!(Locale::from_code("pt-PT"), None);
        assert_eq!(Locale::from_code("en-US"), None);
        assert_eq!(Locale::from_code("en "), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_is_supported_matches_membership() {
        for locale in Locale::all() {
            assert!(Locale::is_supported(locale.code()));
        }
        assert!(!Locale::is_supported("nl"));
        assert!(!Locale::is_supported("pt-"));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Locale::BrazilianPortuguese.to_string(), "pt-BR");
        assert_eq!(Locale::from_str("ja").unwrap(), Locale::Japanese);

        let err = Locale::from_str("klingon").unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLocale(code) if code == "klingon"));
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
    }

    #[test]
    fn test_serde_uses_codes() {
        let serialized = serde_json::to_string(&Locale::BrazilianPortuguese).unwrap();
        assert_eq!(serialized, "\"pt-BR\"");

        let deserialized: Locale = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(deserialized, Locale::Chinese);

        let result: Result<Locale, _> = serde_json::from_str("\"pt-br\"");
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod metadata_tests {
    use super::*;

    #[test]
    fn test_config_is_total() {
        for locale in Locale::all() {
            let config = locale.config();
            assert!(!config.name.is_empty());
            assert!(!config.native_name.is_empty());
            assert!(!config.date_format.is_empty());
        }
    }

    #[test]
    fn test_directions() {
        assert_eq!(Locale::Arabic.direction(), TextDirection::Rtl);
        assert!(Locale::Arabic.is_rtl());

        for locale in Locale::all() {
            if *locale != Locale::Arabic {
                assert_eq!(locale.direction(), TextDirection::Ltr);
                assert!(!locale.is_rtl());
            }
        }
    }

    #[test]
    fn test_date_formats_are_passed_through() {
        assert_eq!(Locale::English.date_format(), "MM/dd/yyyy");
        assert_eq!(Locale::German.date_format(), "dd.MM.yyyy");
        assert_eq!(Locale::Japanese.date_format(), "yyyy/MM/dd");
        assert_eq!(Locale::Chinese.date_format(), "yyyy-MM-dd");
    }

    #[test]
    fn test_names() {
        assert_eq!(Locale::German.name(), "German");
        assert_eq!(Locale::German.native_name(), "Deutsch");
        assert_eq!(Locale::Japanese.native_name(), "日本語");
        assert_eq!(Locale::BrazilianPortuguese.native_name(), "Português (Brasil)");
    }

    #[test]
    fn test_bundle_file_names() {
        assert_eq!(Locale::English.bundle_file(), "en.json");
        assert_eq!(Locale::BrazilianPortuguese.bundle_file(), "pt-BR.json");
    }
}

#[cfg(test)]
mod path_extraction_tests {
    use super::*;

    #[test]
    fn test_leading_segment_is_extracted() {
        assert_eq!(Locale::from_path("/de/tools"), Some(Locale::German));
        assert_eq!(Locale::from_path("/ja"), Some(Locale::Japanese));
        assert_eq!(Locale::from_path("/es/"), Some(Locale::Spanish));
    }

    #[test]
    fn test_full_segment_matching_only() {
        assert_eq!(Locale::from_path("/pt/upload"), Some(Locale::Portuguese));
        assert_eq!(
            Locale::from_path("/pt-BR/upload"),
            Some(Locale::BrazilianPortuguese)
        );

        // "portfolio" starts with "pt" but is not a locale segment
        assert_eq!(Locale::from_path("/portfolio"), None);
        assert_eq!(Locale::from_path("/portfolio/upload"), None);
        assert_eq!(Locale::from_path("/pt-BRx/upload"), None);
        assert_eq!(Locale::from_path("/enterprise"), None);
    }

    #[test]
    fn test_non_leading_segments_are_ignored() {
        assert_eq!(Locale::from_path("/upload/en"), None);
        assert_eq!(Locale::from_path("/tools/de/compress"), None);
    }

    #[test]
    fn test_paths_without_locale() {
        assert_eq!(Locale::from_path(""), None);
        assert_eq!(Locale::from_path("/"), None);
        assert_eq!(Locale::from_path("/upload"), None);
    }

    #[test]
    fn test_repeated_slashes() {
        assert_eq!(Locale::from_path("//es//merge"), Some(Locale::Spanish));
    }
}

#[cfg(test)]
mod path_injection_tests {
    use super::*;

    #[test]
    fn test_prefixes_plain_paths() {
        assert_eq!(Locale::German.localize_path("/tools"), "/de/tools");
        assert_eq!(Locale::English.localize_path("/"), "/en");
        assert_eq!(Locale::English.localize_path(""), "/en");
        assert_eq!(Locale::Japanese.localize_path("tools/compress"), "/ja/tools/compress");
    }

    #[test]
    fn test_replaces_existing_locale_segment() {
        assert_eq!(Locale::French.localize_path("/de/tools"), "/fr/tools");
        assert_eq!(Locale::Spanish.localize_path("/pt-BR/merge"), "/es/merge");
        assert_eq!(Locale::German.localize_path("/pt"), "/de");
    }

    #[test]
    fn test_keeps_lookalike_segments() {
        // Not locale segments, so nothing is stripped
        assert_eq!(
            Locale::English.localize_path("/portfolio"),
            "/en/portfolio"
        );
        assert_eq!(
            Locale::Portuguese.localize_path("/enterprise/pricing"),
            "/pt/enterprise/pricing"
        );
    }

    #[test]
    fn test_normalizes_leading_slashes() {
        assert_eq!(Locale::English.localize_path("//tools"), "/en/tools");
        assert_eq!(Locale::English.localize_path("/de//tools"), "/en/tools");
    }

    #[test]
    fn test_only_the_leading_segment_is_replaced() {
        assert_eq!(
            Locale::French.localize_path("/en/docs/en"),
            "/fr/docs/en"
        );
    }
}

#[cfg(test)]
mod property_based_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_injection_extraction_round_trip(
            index in 0usize..10,
            path in "[a-zA-Z0-9/._-]{0,40}"
        ) {
            let locale = Locale::all()[index];
            let localized = locale.localize_path(&path);
            assert_eq!(Locale::from_path(&localized), Some(locale));
        }

        #[test]
        fn test_injection_is_stable(
            index in 0usize..10,
            path in "[a-zA-Z0-9/._-]{0,40}"
        ) {
            let locale = Locale::all()[index];
            let once = locale.localize_path(&path);
            assert_eq!(locale.localize_path(&once), once);
        }

        #[test]
        fn test_code_round_trip(index in 0usize..10) {
            let locale = Locale::all()[index];
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }
}
