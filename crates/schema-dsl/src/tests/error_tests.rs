//! Property-based tests for error handling
//!
//! These tests validate error serialization and error code handling.

use crate::{ArgKind, BuildError, BuildErrorCode};
use proptest::prelude::*;

/// Strategy to generate arbitrary BuildErrorCode values
fn arb_error_code() -> impl Strategy<Value = BuildErrorCode> {
    prop_oneof![
        Just(BuildErrorCode::MissingArgument),
        Just(BuildErrorCode::UnexpectedArgument),
        Just(BuildErrorCode::ReservedKey),
        Just(BuildErrorCode::UndeclaredRequired),
        Just(BuildErrorCode::DuplicateRequired),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 1: Error Codes Serialize As Their Name**
    /// *For any* error code, the serialized form SHALL be SCREAMING_SNAKE_CASE
    /// and equal `as_str()`.
    #[test]
    fn prop_error_code_serializes_to_screaming_snake_case(code in arb_error_code()) {
        let json = serde_json::to_value(code).expect("Failed to serialize error code");
        let code_str = json.as_str().expect("Code should be a string");

        prop_assert!(
            code_str.chars().all(|c| c.is_uppercase() || c == '_'),
            "Error code '{}' should be SCREAMING_SNAKE_CASE", code_str
        );
        prop_assert_eq!(code_str, code.as_str());
    }

    /// **Property 2: Display Format**
    /// *For any* code, factory and message, `Display` SHALL render
    /// `[CODE] factory: message`.
    #[test]
    fn prop_error_display_format(
        code in arb_error_code(),
        factory in "[a-z_]{1,8}",
        message in "[a-z ]{0,24}",
    ) {
        let error = BuildError::new(code, factory.clone(), message.clone());
        prop_assert_eq!(error.to_string(), format!("[{}] {}: {}", code.as_str(), factory, message));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_skipped() {
        let json = serde_json::to_value(BuildError::missing_argument("arr", "an item schema")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": "MISSING_ARGUMENT",
                "factory": "arr",
                "message": "requires an item schema"
            })
        );
    }

    #[test]
    fn test_unexpected_argument_carries_position() {
        let error = BuildError::unexpected_argument("tup", 2, ArgKind::PropertyEnvelope);
        assert_eq!(error.position, Some(2));
        assert_eq!(error.message, "unexpected property envelope argument at position 2");
    }

    #[test]
    fn test_error_code_classification() {
        assert!(BuildErrorCode::MissingArgument.is_construction_error());
        assert!(!BuildErrorCode::UnexpectedArgument.is_construction_error());
        assert!(!BuildErrorCode::ReservedKey.is_construction_error());
        assert!(!BuildErrorCode::UndeclaredRequired.is_construction_error());
        assert!(!BuildErrorCode::DuplicateRequired.is_construction_error());
    }

    #[test]
    fn test_duplicate_required_names_the_key() {
        let error = BuildError::duplicate_required("obj", "id");
        assert_eq!(error.key.as_deref(), Some("id"));
        assert_eq!(
            error.to_string(),
            "[DUPLICATE_REQUIRED] obj: required property 'id' is listed more than once"
        );
    }
}
