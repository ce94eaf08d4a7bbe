// Static country/language tables. Loaded once, never configurable at
// runtime. Each entry is (country name, store country code, display
// language code); the language is the store's dominant display language
// for that country, falling back to "en" for anything unmapped.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::Write;

pub const DEFAULT_LANGUAGE: &str = "en";

#[rustfmt::skip]
pub static COUNTRIES: &[(&str, &str, &str)] = &[
    ("United States",        "us", "en"),
    ("United Kingdom",       "gb", "en"),
    ("Canada",               "ca", "en"),
    ("Australia",            "au", "en"),
    ("India",                "in", "en"),
    ("Germany",              "de", "de"),
    ("France",               "fr", "fr"),
    ("Japan",                "jp", "ja"),
    ("Brazil",               "br", "pt"),
    ("Mexico",               "mx", "es"),
    ("Spain",                "es", "es"),
    ("Italy",                "it", "it"),
    ("Russia",               "ru", "ru"),
    ("South Korea",          "kr", "ko"),
    ("Turkey",               "tr", "tr"),
    ("China",                "cn", "zh"),
    ("Indonesia",            "id", "id"),
    ("Malaysia",             "my", "ms"),
    ("Philippines",          "ph", "en"),
    ("Singapore",            "sg", "en"),
    ("Thailand",             "th", "th"),
    ("Vietnam",              "vn", "vi"),
    ("Egypt",                "eg", "ar"),
    ("South Africa",         "za", "en"),
    ("United Arab Emirates", "ae", "ar"),
    ("Saudi Arabia",         "sa", "ar"),
    ("Israel",               "il", "iw"),
    ("Argentina",            "ar", "es"),
    ("Chile",                "cl", "es"),
    ("Colombia",             "co", "es"),
    ("Peru",                 "pe", "es"),
    ("Venezuela",            "ve", "es"),
    ("Belgium",              "be", "nl"),
    ("Netherlands",          "nl", "nl"),
    ("Poland",               "pl", "pl"),
    ("Sweden",               "se", "sv"),
    ("Switzerland",          "ch", "de"),
    ("Austria",              "at", "de"),
    ("Denmark",              "dk", "da"),
    ("Finland",              "fi", "fi"),
    ("Norway",               "no", "no"),
    ("Greece",               "gr", "el"),
    ("Hungary",              "hu", "hu"),
    ("Czech Republic",       "cz", "cs"),
    ("Portugal",             "pt", "pt"),
    ("Romania",              "ro", "ro"),
    ("Ukraine",              "ua", "uk"),
    ("New Zealand",          "nz", "en"),
    ("Ireland",              "ie", "en"),
];

static LANGUAGE_BY_COUNTRY: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRIES.iter().map(|&(_, code, lang)| (code, lang)).collect());

/// Map a country code to the store display language, case-insensitively.
/// Unrecognized codes fall back to [`DEFAULT_LANGUAGE`].
pub fn resolve_language(country: &str) -> &'static str {
    LANGUAGE_BY_COUNTRY
        .get(country.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Render the country table for console display, two columns wide and
/// sorted by country name.
pub fn format_country_table() -> String {
    let mut countries: Vec<(&str, &str)> =
        COUNTRIES.iter().map(|&(name, code, _)| (name, code)).collect();
    countries.sort_by_key(|&(name, _)| name);

    let mut out = String::new();
    let _ = writeln!(out, "\nAvailable country codes:");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "{:<25} {:<5}", "Country", "Code");
    let _ = writeln!(out, "{}", "-".repeat(50));

    for pair in countries.chunks(2) {
        match pair {
            [(name_a, code_a), (name_b, code_b)] => {
                let _ = writeln!(out, "{:<25} {:<5}   {:<25} {:<5}", name_a, code_a, name_b, code_b);
            }
            [(name, code)] => {
                let _ = writeln!(out, "{:<25} {:<5}", name, code);
            }
            _ => unreachable!(),
        }
    }

    let _ = writeln!(out, "{}", "=".repeat(50));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves_to_its_language() {
        for &(_, code, lang) in COUNTRIES {
            assert_eq!(resolve_language(code), lang, "country {}", code);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(resolve_language("JP"), "ja");
        assert_eq!(resolve_language("Gb"), "en");
    }

    #[test]
    fn unknown_country_falls_back_to_default() {
        assert_eq!(resolve_language("zz"), DEFAULT_LANGUAGE);
        assert_eq!(resolve_language(""), DEFAULT_LANGUAGE);
    }

    #[test]
    fn table_lists_every_country_once() {
        let table = format_country_table();
        for &(name, code, _) in COUNTRIES {
            assert!(table.contains(name), "missing {}", name);
            assert!(table.contains(code), "missing code {}", code);
        }
    }
}
