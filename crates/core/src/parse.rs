//! Version string tokenizer
//!
//! Turns arbitrary text into the ordered list of numeric components that
//! [`Version::parse`](crate::Version::parse) maps onto major/minor/patch.
//!
//! ## Grammar
//!
//! The grammar is deliberately forgiving:
//!
//! 1. The input is split on every `.`
//! 2. Every non-digit character is deleted from each piece (not trimmed:
//!    deleted from anywhere, so `"2v3"` becomes `"23"`)
//! 3. Pieces left empty are dropped, as are pieces too large for `i64`
//!
//! Nothing in here can fail. `"Invalid"` simply yields no components.

/// Split `input` into numeric components
///
/// Components keep the order in which they appear in the input.
///
/// ```
/// use appver_core::parse::components;
///
/// assert_eq!(components("1.2.3"), vec![1, 2, 3]);
/// assert_eq!(components("1.2v32"), vec![1, 232]);
/// assert!(components("Invalid").is_empty());
/// ```
pub fn components(input: &str) -> Vec<i64> {
    input.split('.').filter_map(component).collect()
}

/// Parse a single dot-delimited piece
///
/// Returns `None` when the piece holds no digits or overflows.
pub fn component(piece: &str) -> Option<i64> {
    let digits: String = piece.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}
