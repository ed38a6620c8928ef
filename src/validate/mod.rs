//! Response validation pipeline.
//!
//! A linear check-accumulate pipeline over the raw model response: every
//! check appends human-readable issue strings and none of them halts
//! processing. A half-valid article still gets a resolved slug and is still
//! written; the issues surface as warnings on the console. This reflects a
//! low-trust posture toward model output: the job here is to flag, not fix.
//!
//! The only impurity is the timestamp fallback for a missing slug, so the
//! clock is injected by the caller and the validator stays a pure function
//! of `(text, now)`.

mod front_matter;

pub use front_matter::{FrontMatter, extract_block, parse_block};

use crate::slug::{fallback_slug, slugify};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length for `meta_title`, in characters.
pub const MAX_META_TITLE_CHARS: usize = 60;

/// Maximum length for `meta_description`, in characters.
pub const MAX_META_DESCRIPTION_CHARS: usize = 160;

/// Matches a quoted article title anywhere in the text, used as the slug
/// fallback source. The prompt opens with `Title: "..."`, and models
/// frequently echo it.
static TITLE_FALLBACK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Title:\s*"([^"]+)""#).expect("invalid title fallback regex"));

/// Result of validating one model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleReport {
    /// Metadata parsed from the leading front matter block. Empty when the
    /// block is missing.
    pub front_matter: FrontMatter,

    /// The resolved slug: taken from the front matter when present, derived
    /// otherwise. Always usable as a filename stem.
    pub slug: String,

    /// Accumulated validation issues, in check order.
    pub issues: Vec<String>,
}

impl ArticleReport {
    /// Whether the response passed every check.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate a raw model response.
///
/// Checks run in a fixed order, accumulating issues without halting:
///
/// 1. leading front matter block present
/// 2. block lines parse as `key: value` pairs
/// 3. `meta_title` within [`MAX_META_TITLE_CHARS`]
/// 4. `meta_description` within [`MAX_META_DESCRIPTION_CHARS`]
/// 5. `slug` present and non-empty, else derived (quoted title in the
///    text, else `now`-based fallback)
/// 6. at least one level-2 heading marker in the text
pub fn validate_article(markdown: &str, now: DateTime<Utc>) -> ArticleReport {
    let mut issues = Vec::new();

    let front_matter = match extract_block(markdown) {
        Some(block) => {
            let (front_matter, warnings) = parse_block(block);
            issues.extend(warnings);
            front_matter
        }
        None => {
            issues.push("Missing YAML front matter block ('---').".to_string());
            FrontMatter::default()
        }
    };

    if let Some(meta_title) = front_matter.get("meta_title") {
        let chars = meta_title.chars().count();
        if chars > MAX_META_TITLE_CHARS {
            issues.push(format!("meta_title too long ({} chars).", chars));
        }
    }

    if let Some(meta_description) = front_matter.get("meta_description") {
        let chars = meta_description.chars().count();
        if chars > MAX_META_DESCRIPTION_CHARS {
            issues.push(format!("meta_description too long ({} chars).", chars));
        }
    }

    let slug = match front_matter.get("slug") {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => {
            issues.push("Missing slug; auto-generated.".to_string());
            derive_slug(markdown, now)
        }
    };

    if !markdown.contains("## ") {
        issues.push("No H2 headers found.".to_string());
    }

    ArticleReport {
        front_matter,
        slug,
        issues,
    }
}

/// Derive a slug when the front matter has none: slugify a quoted title
/// found in the text, or fall back to the clock.
fn derive_slug(markdown: &str, now: DateTime<Utc>) -> String {
    let from_title = TITLE_FALLBACK_RE
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| slugify(m.as_str()))
        .filter(|s| !s.is_empty());

    from_title.unwrap_or_else(|| fallback_slug(now))
}
