//! Generation request model.
//!
//! A `GenerationRequest` captures everything the prompt builder needs for a
//! single article: the title plus optional overrides with their defaults
//! applied. It is created once from CLI input, consumed by the prompt
//! builder, and discarded.

/// Default target word count when `--words` is not given.
pub const DEFAULT_WORD_COUNT: u32 = 1500;

/// Placeholder rendered into the prompt when no secondary keywords exist.
pub const NO_SECONDARY_KEYWORDS: &str = "n/a";

/// A single article-generation request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Article title, verbatim from the command line.
    pub title: String,

    /// Target word count for the article body.
    pub word_count: u32,

    /// Audience description for the prompt.
    pub audience: String,

    /// Geographic focus for the prompt.
    pub geo: String,

    /// Primary SEO keyword. Defaults to the lowercased title.
    pub primary_keyword: String,

    /// Secondary SEO keywords, in the order given. May be empty.
    pub secondary_keywords: Vec<String>,
}

impl GenerationRequest {
    /// Build a request, applying the documented defaults:
    /// the primary keyword falls back to the lowercased title.
    pub fn new(
        title: impl Into<String>,
        word_count: u32,
        audience: impl Into<String>,
        geo: impl Into<String>,
        primary_keyword: Option<String>,
        secondary_keywords: Vec<String>,
    ) -> Self {
        let title = title.into();
        let primary_keyword = primary_keyword.unwrap_or_else(|| title.to_lowercase());

        Self {
            title,
            word_count,
            audience: audience.into(),
            geo: geo.into(),
            primary_keyword,
            secondary_keywords,
        }
    }

    /// Render the secondary keywords for the prompt: a comma-separated list,
    /// or the literal `n/a` placeholder when the list is empty.
    pub fn secondary_keywords_display(&self) -> String {
        if self.secondary_keywords.is_empty() {
            NO_SECONDARY_KEYWORDS.to_string()
        } else {
            self.secondary_keywords.join(", ")
        }
    }
}
