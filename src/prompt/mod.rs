//! Prompt construction for article generation.
//!
//! This module provides:
//!
//! - **Template**: `{variable}` substitution engine
//! - **Templates**: the fixed system and user instruction texts
//! - **Builder**: `build_user_prompt`, which renders a `GenerationRequest`
//!   into the user instruction sent to the model
//!
//! Prompt building is pure and deterministic: the same request always
//! produces the same prompt, with no side effects.

mod template;
mod templates;

pub use template::{TemplateError, render};
pub use templates::{SYSTEM_PROMPT, USER_TEMPLATE};

use crate::error::{QuillError, Result};
use crate::request::GenerationRequest;
use std::collections::HashMap;

/// Render the user instruction for a generation request.
///
/// All placeholders in [`USER_TEMPLATE`] are filled from the request; a
/// mismatch between template and variables is a bug in this crate and is
/// surfaced as a `UserError` rather than papered over.
pub fn build_user_prompt(request: &GenerationRequest) -> Result<String> {
    let vars = template_vars(request);

    render(USER_TEMPLATE, &vars).map_err(|e| {
        QuillError::UserError(format!("internal prompt template error: {}", e))
    })
}

/// Convert a request into the variables the user template consumes.
fn template_vars(request: &GenerationRequest) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    vars.insert("title".to_string(), request.title.clone());
    vars.insert("word_count".to_string(), request.word_count.to_string());
    vars.insert("audience".to_string(), request.audience.clone());
    vars.insert("geo".to_string(), request.geo.clone());
    vars.insert(
        "primary_keyword".to_string(),
        request.primary_keyword.clone(),
    );
    vars.insert(
        "secondary_keywords".to_string(),
        request.secondary_keywords_display(),
    );

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DEFAULT_WORD_COUNT;

    fn default_request() -> GenerationRequest {
        GenerationRequest::new(
            "Best Budget Laptops",
            DEFAULT_WORD_COUNT,
            "beginner bloggers and content marketers",
            "global",
            None,
            vec![],
        )
    }

    #[test]
    fn built_prompt_contains_title_and_defaults() {
        let prompt = build_user_prompt(&default_request()).unwrap();

        assert!(prompt.contains("Best Budget Laptops"));
        assert!(prompt.contains("1500"));
        assert!(prompt.contains("beginner bloggers and content marketers"));
        assert!(prompt.contains("global"));
    }

    #[test]
    fn built_prompt_contains_defaulted_primary_keyword() {
        let prompt = build_user_prompt(&default_request()).unwrap();
        assert!(prompt.contains("Primary keyword: best budget laptops"));
    }

    #[test]
    fn empty_secondary_keywords_render_placeholder() {
        let prompt = build_user_prompt(&default_request()).unwrap();
        assert!(prompt.contains("secondary keywords: n/a"));
    }

    #[test]
    fn secondary_keywords_render_in_given_order() {
        let mut request = default_request();
        request.secondary_keywords =
            vec!["cheap laptops".to_string(), "student laptops".to_string()];

        let prompt = build_user_prompt(&request).unwrap();
        assert!(prompt.contains("cheap laptops, student laptops"));
    }

    #[test]
    fn prompt_building_is_deterministic() {
        let request = default_request();
        let first = build_user_prompt(&request).unwrap();
        let second = build_user_prompt(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn no_placeholders_survive_rendering() {
        let mut request = default_request();
        request.secondary_keywords = vec!["kw".to_string()];

        let prompt = build_user_prompt(&request).unwrap();
        for placeholder in [
            "{title}",
            "{word_count}",
            "{audience}",
            "{geo}",
            "{primary_keyword}",
            "{secondary_keywords}",
        ] {
            assert!(!prompt.contains(placeholder), "unrendered: {}", placeholder);
        }
    }
}
