/*!
 * Presentation and download artifacts.
 *
 * Pure rendering step at the end of the pipeline: assembles the downloadable
 * text document (translation first, then the original English text) and the
 * base64 data link used to embed it. No business logic lives here.
 */

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Separator between the translated and original sections
const SECTION_SEPARATOR: &str = "----------";

/// Assemble the downloadable text document
///
/// Layout: translated prescription first, a separator, then the original
/// English prescription, each under its own header.
pub fn download_document(translated: &str, original: &str, language: &str) -> String {
    format!(
        "Translated Prescription in {}:\n\n{}\n\n{}\n\nOriginal Prescription in English:\n\n{}",
        language, translated, SECTION_SEPARATOR, original
    )
}

/// Encode a text document as a downloadable data link
pub fn download_link(content: &str) -> String {
    let encoded = STANDARD.encode(content.as_bytes());
    format!("data:file/txt;base64,{}", encoded)
}

/// File name of the downloadable text artifact for a language
pub fn text_artifact_name(language: &str) -> String {
    format!("translated_prescription_{}.txt", language)
}

/// File name of the downloadable audio artifact for a language
pub fn audio_artifact_name(language: &str) -> String {
    format!("prescription_audio_{}.mp3", language)
}
