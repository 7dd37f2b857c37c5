use knapsack_utils::*;

#[test]
fn test_parse_number() {
    assert_eq!(parse_number::<u64>("42", false), Ok(42));
    assert_eq!(parse_number::<u64>("+7", false), Ok(7));
    assert_eq!(parse_number::<u64>("0", true), Ok(0));
    assert_eq!(parse_number::<u64>("000", true), Ok(0));
    assert_eq!(parse_number::<u64>("0010", false), Ok(10));
}

#[test]
fn test_parse_number_rejects_zero() {
    assert_eq!(
        parse_number::<u64>("0", false),
        Err(NumberError::NotPositive("0".to_string()))
    );
    assert_eq!(
        parse_number::<u64>("+0", false),
        Err(NumberError::NotPositive("+0".to_string()))
    );
}

#[test]
fn test_parse_number_malformed() {
    for s in ["", "+", "-3", "12a", "1.5", " 4", "x"] {
        assert_eq!(
            parse_number::<u64>(s, true),
            Err(NumberError::Malformed(s.to_string())),
            "{s:?}"
        );
    }
}

#[test]
fn test_parse_number_overflow() {
    assert_eq!(parse_number::<u8>("255", false), Ok(255));
    assert_eq!(
        parse_number::<u8>("256", false),
        Err(NumberError::Overflow("256".to_string()))
    );
    assert_eq!(parse_number::<u64>("18446744073709551615", false), Ok(u64::MAX));
    assert_eq!(
        parse_number::<u64>("18446744073709551616", false),
        Err(NumberError::Overflow("18446744073709551616".to_string()))
    );
}

#[test]
fn test_parse_value() {
    assert_eq!(parse_value("2.5"), Ok(2.5));
    assert_eq!(parse_value("3"), Ok(3.0));
    assert_eq!(
        parse_value("0"),
        Err(NumberError::NonPositiveValue("0".to_string()))
    );
    assert_eq!(
        parse_value("-1.5"),
        Err(NumberError::NonPositiveValue("-1.5".to_string()))
    );
    assert_eq!(
        parse_value("abc"),
        Err(NumberError::Malformed("abc".to_string()))
    );
    assert_eq!(
        parse_value("inf"),
        Err(NumberError::Malformed("inf".to_string()))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        NumberError::Overflow("99".to_string()).to_string(),
        "number overflow in 99"
    );
    assert_eq!(
        NumberError::NotPositive("0".to_string()).to_string(),
        "not a positive integer: 0"
    );
}

#[test]
fn test_checked_value_arithmetic() {
    assert_eq!(checked_value_add(u64::MAX - 1, 1), Some(u64::MAX));
    assert_eq!(checked_value_add(u64::MAX, 1u64), None);
    assert_eq!(checked_value_mul(u64::MAX / 2, 2), Some(u64::MAX - 1));
    assert_eq!(checked_value_mul(u64::MAX / 2 + 1, 2), None);
    assert_eq!(checked_value_mul(u64::MAX, 0), Some(0));
    assert_eq!(checked_value_add(1.5f64, 2.0), Some(3.5));
    assert_eq!(checked_value_mul(f64::MAX, 2.0), None);
}
