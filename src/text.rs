//! Small string helpers

/// Reverse a string by Unicode scalar value
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}
