/*!
 * Tests for the translation service
 */

use scriptsense::app_config::TranslationConfig;
use scriptsense::errors::TranslationError;
use scriptsense::providers::mock::{MockErrorType, MockGradient};
use scriptsense::translation_service::TranslationService;

use crate::common;

/// Test that markdown bold markers are stripped from replies
#[test]
fn test_strip_bold_markers_withMarkers_shouldRemoveAll() {
    assert_eq!(
        TranslationService::strip_bold_markers("**bold**markers**"),
        "boldmarkers"
    );
    assert_eq!(TranslationService::strip_bold_markers("plain text"), "plain text");
    assert_eq!(TranslationService::strip_bold_markers(""), "");
}

/// Test that the prompt carries the target language and the prescription text
#[test]
fn test_build_prompt_withPrescription_shouldInterpolateFields() {
    let prompt = TranslationService::build_prompt("Patient Name: Asha", "Tamil");

    assert!(prompt.contains("professional medical translator"));
    assert!(prompt.contains("into Tamil"));
    assert!(prompt.contains("medical terminology, dosage instructions"));
    assert!(prompt.ends_with("Patient Name: Asha"));
}

/// Test a successful translation through the mock provider
#[tokio::test]
async fn test_translate_withMockProvider_shouldReturnCleanedText() {
    let mock = MockGradient::with_reply("**மருந்து**: Paracetamol");
    let tracker = mock.tracker();
    let service = TranslationService::with_mock_provider(TranslationConfig::default(), mock);

    let record = common::sample_record();
    let result = service.translate(&record.format(), "Tamil").await.unwrap();

    assert_eq!(result, "மருந்து: Paracetamol");
    assert_eq!(tracker.lock().unwrap().call_count, 1);
}

/// Test that a provider failure is surfaced as an error, not retried here
#[tokio::test]
async fn test_translate_withFailingProvider_shouldReturnError() {
    let mock = MockGradient::new();
    mock.fail_next_call(MockErrorType::RateLimit);
    let tracker = mock.tracker();
    let service = TranslationService::with_mock_provider(TranslationConfig::default(), mock);

    let result = service.translate("Patient Name: Asha", "Hindi").await;

    assert!(matches!(result, Err(TranslationError::Provider(_))));
    // One logical request only; the caller must re-invoke manually
    assert_eq!(tracker.lock().unwrap().call_count, 1);
}

/// Test that an empty provider reply is rejected
#[tokio::test]
async fn test_translate_withEmptyReply_shouldReturnEmptyResultError() {
    let mock = MockGradient::with_reply("   ");
    let service = TranslationService::with_mock_provider(TranslationConfig::default(), mock);

    let result = service.translate("Patient Name: Asha", "Hindi").await;

    assert!(matches!(result, Err(TranslationError::EmptyResult)));
}

/// Test that the request sent to the provider carries the prompt
#[tokio::test]
async fn test_translate_withMockProvider_shouldSendPromptToProvider() {
    let mock = MockGradient::new();
    let tracker = mock.tracker();
    let service = TranslationService::with_mock_provider(TranslationConfig::default(), mock);

    service.translate("Diagnosis: Influenza", "Bengali").await.unwrap();

    let last_request = tracker.lock().unwrap().last_request.clone().unwrap();
    assert!(last_request.contains("Diagnosis: Influenza"));
    assert!(last_request.contains("Bengali"));
}
