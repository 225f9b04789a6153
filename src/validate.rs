//! Input validation and prefix arithmetic.
//!
//! Base keys are raw 64-hex public keys. Prefixes use the nano base32
//! alphabet with two interchangeable wildcard glyphs (`*` and `.`); all
//! storage and cost math happens on the normalized (`.`) form.

use crate::error::{Error, Result};

/// Length of a base public key and of a mined result key, in hex chars.
pub const KEY_LEN: usize = 64;

/// Maximum prefix length: one leading char plus up to 59 body chars.
pub const MAX_PREFIX_LEN: usize = 60;

/// The canonical wildcard glyph after normalization.
pub const WILDCARD: char = '.';

/// Alphabet allowed in prefix body positions (nano base32).
const PREFIX_ALPHABET: &str = "13456789abcdefghijkmnopqrstuwxyz";

/// Bits of constraint contributed by a fixed leading character.
/// The first address character only varies between two values.
const LEAD_CHAR_BITS: u32 = 1;

/// Bits of constraint contributed by each fixed body character.
const BODY_CHAR_BITS: u32 = 32;

/// Check that `s` is a 64-character hex string (case-insensitive).
pub fn validate_base_key(s: &str) -> Result<()> {
    if s.len() == KEY_LEN && s.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(Error::InvalidBaseKey)
    }
}

/// Rewrite `*` wildcards to `.`. The two glyphs mean the same thing and the
/// latter is the canonical stored form.
pub fn normalize_prefix(s: &str) -> String {
    s.replace('*', ".")
}

/// Check a normalized prefix against the address grammar: a leading char from
/// `{1, 3, .}` followed by up to 59 chars from the base32 alphabet or `.`.
pub fn validate_prefix(s: &str) -> Result<()> {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err(Error::InvalidPrefix);
    };
    if !matches!(first, '1' | '3' | WILDCARD) {
        return Err(Error::InvalidPrefix);
    }
    if s.chars().count() > MAX_PREFIX_LEN {
        return Err(Error::InvalidPrefix);
    }
    for c in chars {
        if c != WILDCARD && !PREFIX_ALPHABET.contains(c) {
            return Err(Error::InvalidPrefix);
        }
    }
    Ok(())
}

/// Bits of constraint in a normalized prefix. Wildcards are free; a fixed
/// lead char costs 1 bit, each fixed body char costs 32.
pub fn bit_cost(prefix: &str) -> u32 {
    let mut bits = 0;
    let mut chars = prefix.chars();
    if chars.next().is_some_and(|c| c != WILDCARD) {
        bits += LEAD_CHAR_BITS;
    }
    for c in chars {
        if c != WILDCARD {
            bits += BODY_CHAR_BITS;
        }
    }
    bits
}
