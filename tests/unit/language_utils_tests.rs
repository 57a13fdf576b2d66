/*!
 * Tests for the language catalogue and synthesis code table
 */

use std::collections::HashSet;

use scriptsense::language_utils::{is_supported, synthesis_code, DEFAULT_SYNTHESIS_CODE, SUPPORTED_LANGUAGES};

/// Test codes for languages with a dedicated synthesis voice
#[test]
fn test_synthesis_code_withDedicatedVoice_shouldReturnOwnCode() {
    assert_eq!(synthesis_code("Hindi"), "hi");
    assert_eq!(synthesis_code("Bengali"), "bn");
    assert_eq!(synthesis_code("Telugu"), "te");
    assert_eq!(synthesis_code("Tamil"), "ta");
    assert_eq!(synthesis_code("Urdu"), "ur");
    assert_eq!(synthesis_code("Sindhi"), "sd");
}

/// Test that regional languages without a voice fall back to Hindi
#[test]
fn test_synthesis_code_withRegionalLanguages_shouldFallBackToHindi() {
    for language in [
        "Maithili", "Manipuri", "Santhali", "Kashmiri", "Konkani", "Dogri",
        "Rajasthani", "Bodo", "Haryanvi", "Khasi", "Mizo", "Nagamese",
    ] {
        assert_eq!(synthesis_code(language), "hi", "wrong fallback for {}", language);
    }
}

/// Test the German fallback for Sorbian
#[test]
fn test_synthesis_code_withSorbian_shouldFallBackToGerman() {
    assert_eq!(synthesis_code("Sorbian"), "de");
}

/// Test that names outside the catalogue resolve through ISO 639-1 lookup
#[test]
fn test_synthesis_code_withOutOfCatalogueName_shouldResolveIsoCode() {
    assert_eq!(synthesis_code("French"), "fr");
    assert_eq!(synthesis_code("German"), "de");
}

/// Test the documented default for unknown language names
#[test]
fn test_synthesis_code_withUnknownName_shouldUseDefault() {
    assert_eq!(synthesis_code("Klingon"), DEFAULT_SYNTHESIS_CODE);
    assert_eq!(synthesis_code(""), DEFAULT_SYNTHESIS_CODE);
    assert_eq!(synthesis_code("   "), DEFAULT_SYNTHESIS_CODE);
}

/// Test that surrounding whitespace is ignored
#[test]
fn test_synthesis_code_withWhitespace_shouldTrim() {
    assert_eq!(synthesis_code(" Tamil "), "ta");
}

/// Test that catalogue names resolve regardless of case
#[test]
fn test_synthesis_code_withMixedCaseCatalogueName_shouldResolveOwnCode() {
    assert_eq!(synthesis_code("tamil"), "ta");
    assert_eq!(synthesis_code("TAMIL"), "ta");
    assert_eq!(synthesis_code("maithili"), "hi");
    assert_eq!(synthesis_code("sorbian"), "de");
}

/// Test that every name accepted by is_supported gets a catalogue voice,
/// never the unknown-name default
#[test]
fn test_synthesis_code_withSupportedSpelling_shouldNeverUseDefault() {
    for language in SUPPORTED_LANGUAGES {
        let lowered = language.to_lowercase();
        assert!(is_supported(&lowered));
        assert_eq!(synthesis_code(&lowered), synthesis_code(language));
        assert_ne!(synthesis_code(&lowered), DEFAULT_SYNTHESIS_CODE);
    }
}

/// Test that every catalogue entry resolves to a non-empty code
#[test]
fn test_synthesis_code_withAllSupportedLanguages_shouldResolve() {
    for language in SUPPORTED_LANGUAGES {
        assert!(!synthesis_code(language).is_empty());
    }
}

/// Test the supported-language membership check
#[test]
fn test_is_supported_withCatalogueNames_shouldMatchCaseInsensitively() {
    assert!(is_supported("Tamil"));
    assert!(is_supported("tamil"));
    assert!(is_supported(" TAMIL "));
    assert!(!is_supported("Klingon"));
    assert!(!is_supported(""));
}

/// Test that the catalogue has no duplicate entries
#[test]
fn test_supported_languages_shouldContainNoDuplicates() {
    let unique: HashSet<_> = SUPPORTED_LANGUAGES.iter().collect();
    assert_eq!(unique.len(), SUPPORTED_LANGUAGES.len());
}
