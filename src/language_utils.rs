/*!
 * Language utilities for the translation and synthesis pipeline.
 *
 * This module owns the catalogue of target languages offered to the user and
 * the explicit mapping from language names to the codes understood by the
 * speech-synthesis service.
 */

use isolang::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Code used when a language has no dedicated synthesis voice at all
pub const DEFAULT_SYNTHESIS_CODE: &str = "en";

/// Code used for regional Indian languages without a dedicated voice
const HINDI_FALLBACK_CODE: &str = "hi";

/// Target languages offered for translation
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "Hindi", "Bengali", "Telugu", "Marathi", "Tamil", "Urdu",
    "Gujarati", "Malayalam", "Kannada", "Punjabi", "Assamese",
    "Odia", "Maithili", "Manipuri", "Santhali", "Kashmiri",
    "Konkani", "Dogri", "Rajasthani", "Bodo", "Sindhi", "Haryanvi",
    "Khasi", "Mizo", "Nagamese", "Sorbian",
];

/// Synthesis code table for the supported languages
///
/// Several regional languages have no dedicated voice in the synthesis
/// service and deliberately share the Hindi code; Sorbian shares the German
/// one. This is a limitation of the synthesis provider, not of this table.
static SYNTHESIS_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Hindi", "hi"),
        ("Bengali", "bn"),
        ("Telugu", "te"),
        ("Marathi", "mr"),
        ("Tamil", "ta"),
        ("Urdu", "ur"),
        ("Gujarati", "gu"),
        ("Malayalam", "ml"),
        ("Kannada", "kn"),
        ("Punjabi", "pa"),
        ("Assamese", "as"),
        ("Odia", "or"),
        ("Sindhi", "sd"),
        // No dedicated voice, Hindi fallback
        ("Maithili", HINDI_FALLBACK_CODE),
        ("Manipuri", HINDI_FALLBACK_CODE),
        ("Santhali", HINDI_FALLBACK_CODE),
        ("Kashmiri", HINDI_FALLBACK_CODE),
        ("Konkani", HINDI_FALLBACK_CODE),
        ("Dogri", HINDI_FALLBACK_CODE),
        ("Rajasthani", HINDI_FALLBACK_CODE),
        ("Bodo", HINDI_FALLBACK_CODE),
        ("Haryanvi", HINDI_FALLBACK_CODE),
        ("Khasi", HINDI_FALLBACK_CODE),
        ("Mizo", HINDI_FALLBACK_CODE),
        ("Nagamese", HINDI_FALLBACK_CODE),
        // No dedicated voice, German fallback
        ("Sorbian", "de"),
    ])
});

/// Resolve the synthesis language code for a language name
///
/// Lookup order: the explicit table above (catalogue names match
/// case-insensitively, like [`is_supported`]), then an ISO 639-1 lookup by
/// English language name for names outside the catalogue, then
/// [`DEFAULT_SYNTHESIS_CODE`]. This never fails; an unknown name degrades to
/// the default voice rather than aborting synthesis.
pub fn synthesis_code(language: &str) -> &'static str {
    let name = language.trim();

    if let Some(code) = SYNTHESIS_CODES
        .iter()
        .find(|(catalogue_name, _)| catalogue_name.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
    {
        return code;
    }

    Language::from_name(name)
        .and_then(|lang| lang.to_639_1())
        .unwrap_or(DEFAULT_SYNTHESIS_CODE)
}

/// Whether a language name is part of the offered catalogue
pub fn is_supported(language: &str) -> bool {
    let name = language.trim();
    SUPPORTED_LANGUAGES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(name))
}
