use super::{float_prefix, int_prefix};

#[test]
fn float_plain() {
    assert_eq!(float_prefix("3.1400"), Some(3.14));
    assert_eq!(float_prefix("1.2345"), Some(1.2345));
    assert_eq!(float_prefix("-0.5"), Some(-0.5));
    assert_eq!(float_prefix("+2"), Some(2.0));
}

#[test]
fn float_partial_mantissa() {
    assert_eq!(float_prefix("12."), Some(12.0));
    assert_eq!(float_prefix(".25"), Some(0.25));
}

#[test]
fn float_exponent() {
    assert_eq!(float_prefix("1.5e3"), Some(1500.0));
    assert_eq!(float_prefix("2E-1"), Some(0.2));
    // incomplete exponent is trailing garbage
    assert_eq!(float_prefix("1.5e"), Some(1.5));
    assert_eq!(float_prefix("1.5e+x"), Some(1.5));
}

#[test]
fn float_whitespace_and_garbage() {
    assert_eq!(float_prefix("  4.5"), Some(4.5));
    assert_eq!(float_prefix("4.5\r"), Some(4.5));
    assert_eq!(float_prefix("4.5 turns"), Some(4.5));
    assert_eq!(float_prefix("4.5.6"), Some(4.5));
}

#[test]
fn float_invalid() {
    assert_eq!(float_prefix(""), None);
    assert_eq!(float_prefix("invalid property"), None);
    assert_eq!(float_prefix("-"), None);
    assert_eq!(float_prefix("."), None);
    assert_eq!(float_prefix("x1.0"), None);
}

#[test]
fn int_plain() {
    assert_eq!(int_prefix("42"), Some(42));
    assert_eq!(int_prefix("-7"), Some(-7));
    assert_eq!(int_prefix("+1"), Some(1));
    assert_eq!(int_prefix("007"), Some(7));
}

#[test]
fn int_trailing_garbage() {
    assert_eq!(int_prefix("8\r"), Some(8));
    assert_eq!(int_prefix("1.9"), Some(1));
    assert_eq!(int_prefix(" 3 idle"), Some(3));
}

#[test]
fn int_saturates() {
    assert_eq!(int_prefix("99999999999"), Some(i32::MAX));
    assert_eq!(int_prefix("-99999999999"), Some(i32::MIN));
}

#[test]
fn int_invalid() {
    assert_eq!(int_prefix(""), None);
    assert_eq!(int_prefix("unknown command"), None);
    assert_eq!(int_prefix("-"), None);
    assert_eq!(int_prefix(".5"), None);
}
