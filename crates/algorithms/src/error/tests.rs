use super::*;
use pqkem_api::Error as CoreError;

#[test]
fn test_error_conversion() {
    let err = Error::Parameter {
        name: "output_length",
        reason: "must be non-zero",
    };
    match CoreError::from(err) {
        CoreError::InvalidParameter { context, .. } => assert_eq!(context, "output_length"),
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }

    let err = Error::Length {
        context: "digest",
        expected: 32,
        actual: 16,
    };
    match CoreError::from(err) {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "digest");
            assert_eq!(expected, 32);
            assert_eq!(actual, 16);
        }
        other => panic!("Expected InvalidLength error, got {:?}", other),
    }
}

#[test]
fn test_xof_squeezing_error() {
    let err = Error::xof_squeezing();
    assert_eq!(
        err.to_string(),
        "Processing error in XOF: Cannot update after squeezing has begun"
    );
    assert!(matches!(CoreError::from(err), CoreError::Other { context: "XOF", .. }));
}

#[test]
fn test_validate_helpers() {
    assert!(validate::parameter(true, "x", "y").is_ok());
    assert_eq!(
        validate::parameter(false, "x", "y"),
        Err(Error::Parameter { name: "x", reason: "y" })
    );
    assert!(validate::length("block", 168, 168).is_ok());
    assert!(validate::length("block", 167, 168).is_err());
}
