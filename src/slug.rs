//! Slug derivation for article filenames.
//!
//! A slug is the filesystem- and URL-safe stem of the output file. It is
//! normally supplied by the model in the front matter; when it is missing,
//! the validator derives one from the article title or, failing that, from
//! the clock (see `validate`).

use chrono::{DateTime, Utc};

/// Convert a title into a filesystem- and URL-safe slug.
///
/// Lowercases the input, maps every run of non-alphanumeric characters to a
/// single hyphen, and trims leading/trailing hyphens.
///
/// ```text
/// slugify("Best Budget Laptops")      -> "best-budget-laptops"
/// slugify("  C++ -- for beginners ")  -> "c-for-beginners"
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Build the timestamp-based fallback slug used when no slug can be derived
/// from the article text.
///
/// Format: `post-YYYYMMDDHHMM`. Minute resolution means two runs in the
/// same minute collide; last writer wins, which is accepted behavior.
pub fn fallback_slug(now: DateTime<Utc>) -> String {
    format!("post-{}", now.format("%Y%m%d%H%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Best Budget Laptops"), "best-budget-laptops");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("hello -- world"), "hello-world");
        assert_eq!(slugify("a__b..c"), "a-b-c");
    }

    #[test]
    fn slugify_trims_edges() {
        assert_eq!(slugify("  spaced out  "), "spaced-out");
        assert_eq!(slugify("---dashes---"), "dashes");
    }

    #[test]
    fn slugify_keeps_digits() {
        assert_eq!(slugify("Top 10 Tips for 2025"), "top-10-tips-for-2025");
    }

    #[test]
    fn slugify_drops_non_ascii() {
        assert_eq!(slugify("café & crème"), "caf-cr-me");
    }

    #[test]
    fn slugify_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn fallback_slug_uses_minute_resolution() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 14, 30, 59).unwrap();
        assert_eq!(fallback_slug(now), "post-202403071430");
    }

    #[test]
    fn fallback_slug_zero_pads() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(fallback_slug(now), "post-202401020304");
    }
}
