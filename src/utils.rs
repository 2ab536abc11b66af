//! Pluralization utilities.

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "digest")` -> `"0 digests"`
/// - `plural_count(1, "digest")` -> `"1 digest"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_count_handles_singular_and_plural() {
        assert_eq!(plural_count(0, "digest"), "0 digests");
        assert_eq!(plural_count(1, "digest"), "1 digest");
        assert_eq!(plural_count(5, "digest"), "5 digests");
    }
}
