/*!
 * Tests for download artifact rendering
 */

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use scriptsense::export;

/// Test the layout of the downloadable document
#[test]
fn test_download_document_shouldPlaceTranslationBeforeOriginal() {
    let document = export::download_document("வணக்கம்", "Patient Details", "Tamil");

    assert!(document.starts_with("Translated Prescription in Tamil:\n\nவணக்கம்"));
    assert!(document.contains("\n\n----------\n\n"));
    assert!(document.ends_with("Original Prescription in English:\n\nPatient Details"));

    let separator = document.find("----------").unwrap();
    assert!(document.find("வணக்கம்").unwrap() < separator);
    assert!(document.find("Patient Details").unwrap() > separator);
}

/// Test that the download link is a decodable base64 data URI
#[test]
fn test_download_link_shouldEncodeContentAsDataUri() {
    let link = export::download_link("hello prescription");

    assert!(link.starts_with("data:file/txt;base64,"));

    let encoded = link.strip_prefix("data:file/txt;base64,").unwrap();
    let decoded = STANDARD.decode(encoded).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "hello prescription");
}

/// Test the artifact file names
#[test]
fn test_artifact_names_shouldIncludeLanguage() {
    assert_eq!(
        export::text_artifact_name("Tamil"),
        "translated_prescription_Tamil.txt"
    );
    assert_eq!(
        export::audio_artifact_name("Tamil"),
        "prescription_audio_Tamil.mp3"
    );
}
