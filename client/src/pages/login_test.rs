use super::*;

#[test]
fn validate_phone_input_accepts_common_shapes() {
    for input in ["+15551234567", "555-123-4567", "(555) 123-4567", "555.123.456789", "5551234567"] {
        assert!(validate_phone_input(input).is_ok(), "expected {input:?} to be valid");
    }
}

#[test]
fn validate_phone_input_trims_whitespace() {
    assert_eq!(validate_phone_input("  555 123 4567 "), Ok("555 123 4567".to_owned()));
}

#[test]
fn validate_phone_input_rejects_malformed_numbers() {
    for input in ["", "   ", "12345", "555-123-456", "555-123-4567890", "abc-def-ghij", "+1 555-123-4567", "555--123-4567"] {
        assert_eq!(validate_phone_input(input), Err(INVALID_PHONE), "expected {input:?} to be rejected");
    }
}

#[test]
fn validate_otp_input_requires_six_characters() {
    assert_eq!(validate_otp_input(" 123456 "), Ok("123456".to_owned()));
    assert_eq!(validate_otp_input("12345"), Err(INVALID_OTP_LENGTH));
    assert_eq!(validate_otp_input("1234567"), Err(INVALID_OTP_LENGTH));
    assert_eq!(validate_otp_input(""), Err(INVALID_OTP_LENGTH));
}

#[test]
fn wrong_code_of_right_length_passes_validation() {
    // Length is the form's concern; correctness is the session store's.
    assert_eq!(validate_otp_input("000000"), Ok("000000".to_owned()));
}
