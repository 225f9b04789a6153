//! Validator behavior: base key grammar, prefix grammar, bit cost.

use vanity_pool::error::Error;
use vanity_pool::validate::{bit_cost, normalize_prefix, validate_base_key, validate_prefix};

const BASE_KEY: &str = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";

// ---------------------------------------------------------------------------
// Base key
// ---------------------------------------------------------------------------

#[test]
fn base_key_accepts_64_hex_chars_any_case() {
    validate_base_key(BASE_KEY).unwrap();
    validate_base_key(&BASE_KEY.to_uppercase()).unwrap();
}

#[test]
fn base_key_rejects_wrong_length() {
    assert!(matches!(
        validate_base_key(&BASE_KEY[..63]),
        Err(Error::InvalidBaseKey)
    ));
    let long = format!("{BASE_KEY}0");
    assert!(matches!(
        validate_base_key(&long),
        Err(Error::InvalidBaseKey)
    ));
    assert!(matches!(validate_base_key(""), Err(Error::InvalidBaseKey)));
}

#[test]
fn base_key_rejects_non_hex() {
    let bad = format!("g{}", &BASE_KEY[1..]);
    assert!(matches!(
        validate_base_key(&bad),
        Err(Error::InvalidBaseKey)
    ));
}

// ---------------------------------------------------------------------------
// Prefix grammar
// ---------------------------------------------------------------------------

#[test]
fn normalization_rewrites_star_to_dot() {
    assert_eq!(normalize_prefix("1abc*"), "1abc.");
    assert_eq!(normalize_prefix("***"), "...");
    assert_eq!(normalize_prefix("1abc."), "1abc.");
}

#[test]
fn prefix_accepts_grammar() {
    validate_prefix("1").unwrap();
    validate_prefix("3").unwrap();
    validate_prefix(".").unwrap();
    validate_prefix("1abc.").unwrap();
    validate_prefix(".kitten").unwrap();
}

#[test]
fn prefix_rejects_bad_lead_char() {
    // Addresses can only start with 1 or 3 (or a wildcard)
    assert!(matches!(validate_prefix("2abc"), Err(Error::InvalidPrefix)));
    assert!(matches!(validate_prefix("abc"), Err(Error::InvalidPrefix)));
    assert!(matches!(validate_prefix(""), Err(Error::InvalidPrefix)));
}

#[test]
fn prefix_rejects_chars_outside_base32_alphabet() {
    // 0, 2, l, v are not in the nano alphabet
    assert!(matches!(validate_prefix("1ab0"), Err(Error::InvalidPrefix)));
    assert!(matches!(validate_prefix("1ab2"), Err(Error::InvalidPrefix)));
    assert!(matches!(validate_prefix("1abl"), Err(Error::InvalidPrefix)));
    assert!(matches!(validate_prefix("1abv"), Err(Error::InvalidPrefix)));
    assert!(matches!(validate_prefix("1ABC"), Err(Error::InvalidPrefix)));
}

#[test]
fn prefix_rejects_over_max_length() {
    let max = format!("1{}", "a".repeat(59));
    validate_prefix(&max).unwrap();

    let too_long = format!("1{}", "a".repeat(60));
    assert!(matches!(
        validate_prefix(&too_long),
        Err(Error::InvalidPrefix)
    ));
}

// ---------------------------------------------------------------------------
// Bit cost
// ---------------------------------------------------------------------------

#[test]
fn bit_cost_weighs_lead_and_body_chars_differently() {
    assert_eq!(bit_cost("1"), 1);
    assert_eq!(bit_cost("."), 0);
    assert_eq!(bit_cost(".a"), 32);
    assert_eq!(bit_cost("1a"), 33);
    assert_eq!(bit_cost("1abc."), 1 + 3 * 32);
    assert_eq!(bit_cost("1a.b"), 1 + 2 * 32);
}

#[test]
fn bit_cost_of_normalized_wildcards_is_zero() {
    assert_eq!(bit_cost(&normalize_prefix("***")), 0);
    assert_eq!(bit_cost(&normalize_prefix("*a*")), 32);
}
