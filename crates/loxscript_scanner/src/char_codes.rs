//! Character classification helpers used by the scanner.
//!
//! Identifiers are ASCII-only: letters, digits, and underscore.

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_alpha_numeric(ch: char) -> bool {
    is_digit(ch) || is_alpha(ch)
}
