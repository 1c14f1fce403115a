// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale code handling and plural rules.
//!
//! Catalogs carry a locale such as `nb_NO` in their `language` attribute.
//! This module splits such codes, validates the primary subtag against the
//! ISO 639-1 table, and provides the plural-form rules that numerus
//! messages need.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Splits a locale code into its language subtag and optional territory.
///
/// Accepts both the underscore and hyphen separators.
///
/// # Examples
/// ```
/// assert_eq!(lincat::lang::split_locale("nb_NO"), ("nb", Some("NO")));
/// assert_eq!(lincat::lang::split_locale("de-DE"), ("de", Some("DE")));
/// assert_eq!(lincat::lang::split_locale("fr"), ("fr", None));
/// ```
pub fn split_locale(locale: &str) -> (&str, Option<&str>) {
    match locale.split_once(['_', '-']) {
        Some((language, territory)) if !territory.is_empty() => (language, Some(territory)),
        Some((language, _)) => (language, None),
        None => (locale, None),
    }
}

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// Case-sensitive: catalog language attributes use lowercase subtags.
///
/// # Examples
/// ```
/// assert!(lincat::lang::is_valid_iso639_1("nb"));
/// assert!(lincat::lang::is_valid_iso639_1("ja"));
/// assert!(!lincat::lang::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Returns the English name of an ISO 639-1 code.
///
/// Returns `None` for unrecognised codes. Covers the languages common in
/// Qt translation trees; the Norwegian family is kept distinct because
/// `nb`, `nn` and `no` name different catalogs.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "de" => Some("German"),
        "ja" => Some("Japanese"),
        "pt" => Some("Portuguese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        "it" => Some("Italian"),
        "ru" => Some("Russian"),
        "ar" => Some("Arabic"),
        "hi" => Some("Hindi"),
        "nl" => Some("Dutch"),
        "sv" => Some("Swedish"),
        "pl" => Some("Polish"),
        "tr" => Some("Turkish"),
        "vi" => Some("Vietnamese"),
        "th" => Some("Thai"),
        "uk" => Some("Ukrainian"),
        "cs" => Some("Czech"),
        "el" => Some("Greek"),
        "he" => Some("Hebrew"),
        "da" => Some("Danish"),
        "fi" => Some("Finnish"),
        "nb" => Some("Norwegian Bokmål"),
        "nn" => Some("Norwegian Nynorsk"),
        "no" => Some("Norwegian"),
        "hu" => Some("Hungarian"),
        "ro" => Some("Romanian"),
        "id" => Some("Indonesian"),
        "ms" => Some("Malay"),
        _ => None,
    }
}

/// Plural rule families for numerus messages.
///
/// Mirrors the rule groups Qt's numerus tables use. A numerus message
/// carries one form per group member, selected by the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// No plural distinction (ja, ko, zh, th, vi, id, ms).
    OneForm,
    /// Singular only at n == 1 (Germanic and most others; nb is here).
    TwoFormGermanic,
    /// Singular at n <= 1 (fr).
    TwoFormFrench,
    /// Three forms keyed on the last digits (ru, uk, pl, cs, sk, sr, hr).
    ThreeFormSlavic,
}

impl PluralRule {
    /// Picks the rule for a locale code; unknown languages get the
    /// Germanic two-form rule.
    pub fn for_language(language: &str) -> Self {
        let (primary, _) = split_locale(language);
        match primary {
            "ja" | "ko" | "zh" | "th" | "vi" | "id" | "ms" => PluralRule::OneForm,
            "fr" => PluralRule::TwoFormFrench,
            "ru" | "uk" | "pl" | "cs" | "sk" | "sr" | "hr" | "be" | "bs" => {
                PluralRule::ThreeFormSlavic
            }
            _ => PluralRule::TwoFormGermanic,
        }
    }

    /// Number of numerus forms a message needs under this rule.
    pub fn form_count(self) -> usize {
        match self {
            PluralRule::OneForm => 1,
            PluralRule::TwoFormGermanic | PluralRule::TwoFormFrench => 2,
            PluralRule::ThreeFormSlavic => 3,
        }
    }

    /// Index of the form to use for a given count.
    pub fn index(self, n: u64) -> usize {
        match self {
            PluralRule::OneForm => 0,
            PluralRule::TwoFormGermanic => usize::from(n != 1),
            PluralRule::TwoFormFrench => usize::from(n > 1),
            PluralRule::ThreeFormSlavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// Number of plural forms the catalog language expects.
pub fn plural_form_count(language: &str) -> usize {
    PluralRule::for_language(language).form_count()
}

/// Which numerus form a count selects for the catalog language.
pub fn plural_index(language: &str, n: u64) -> usize {
    PluralRule::for_language(language).index(n)
}
