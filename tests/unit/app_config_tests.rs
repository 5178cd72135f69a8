/*!
 * Tests for application configuration
 */

use bookwai::app_config::Config;
use crate::common;

#[test]
fn test_defaultConfig_shouldUseSequentialBaseline() {
    let config = Config::default();
    assert_eq!(config.translation.common.concurrent_requests, 1);
    assert_eq!(config.translation.common.rate_limit_delay_ms, 1000);
    assert_eq!(config.document.overlap_paragraphs, 1);
    assert_eq!(config.document.max_chunk_size, 2000);
}

#[test]
fn test_validate_withMissingApiKey_shouldFail() {
    let config = Config::default();
    let result = config.validate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("API key"));
}

#[test]
fn test_validate_withApiKey_shouldPass() {
    let mut config = Config::default();
    config.translation.provider.api_key = "sk-test".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.translation.provider.api_key = "sk-test".to_string();
    config.target_language = "xx".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroChunkSize_shouldFail() {
    let mut config = Config::default();
    config.translation.provider.api_key = "sk-test".to_string();
    config.document.max_chunk_size = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_configRoundTrip_shouldPreserveValues() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.translation.provider.model = "gpt-4o-mini".to_string();
    config.document.overlap_paragraphs = 2;
    config.translation.common.glossary_terms = vec!["Borrow Checker".to_string()];
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.translation.provider.model, "gpt-4o-mini");
    assert_eq!(loaded.document.overlap_paragraphs, 2);
    assert_eq!(loaded.translation.common.glossary_terms, vec!["Borrow Checker".to_string()]);
}

#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() {
    let dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(
        &dir.path().to_path_buf(),
        "conf.json",
        r#"{"source_language": "en", "target_language": "fr"}"#,
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.target_language, "fr");
    assert_eq!(config.translation.provider.model, "gpt-4o");
    assert_eq!(config.translation.provider.endpoint, "https://api.openai.com/v1");
}
