/*!
 * Tests for language utilities
 */

use bookwai::language_utils::{
    get_language_name, language_codes_match, normalize_to_part2t, validate_language_code,
};

#[test]
fn test_validate_withPart1Code_shouldAccept() {
    assert!(validate_language_code("en").is_ok());
    assert!(validate_language_code("FA").is_ok());
}

#[test]
fn test_validate_withPart2BCode_shouldAccept() {
    // Persian's bibliographic code differs from its terminologic code
    assert!(validate_language_code("per").is_ok());
    assert!(validate_language_code("fre").is_ok());
}

#[test]
fn test_validate_withGarbage_shouldReject() {
    assert!(validate_language_code("zz").is_err());
    assert!(validate_language_code("engl").is_err());
    assert!(validate_language_code("").is_err());
}

#[test]
fn test_normalize_shouldMapToPart2T() {
    assert_eq!(normalize_to_part2t("en").unwrap(), "eng");
    assert_eq!(normalize_to_part2t("fa").unwrap(), "fas");
    assert_eq!(normalize_to_part2t("per").unwrap(), "fas");
}

#[test]
fn test_languageCodesMatch_acrossCodeFamilies() {
    assert!(language_codes_match("fa", "per"));
    assert!(language_codes_match("fr", "fra"));
    assert!(!language_codes_match("en", "fa"));
}

#[test]
fn test_getLanguageName_shouldResolveEnglishNames() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("fa").unwrap(), "Persian");
    assert!(get_language_name("zz").is_err());
}
