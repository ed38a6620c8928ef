//! Placeholder substitution for prompt templates.
//!
//! Templates use `{name}` placeholders; `{{` and `}}` render literal braces.
//! Substitution is fail-safe: a placeholder with no matching variable is an
//! error, never an empty string, so a typo in a template cannot silently
//! produce a degraded prompt.

use std::collections::HashMap;
use thiserror::Error;

/// Errors produced while rendering a prompt template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder referenced a variable that was not provided.
    #[error("no value for placeholder '{{{0}}}' in template")]
    MissingVariable(String),

    /// A `{` was opened at the given byte offset but never closed.
    #[error("unclosed placeholder starting at offset {0} in template")]
    UnclosedPlaceholder(usize),

    /// A `{}` placeholder with no name at the given byte offset.
    #[error("empty placeholder at offset {0} in template")]
    EmptyPlaceholder(usize),
}

/// Render a template by substituting `{name}` placeholders from `vars`.
///
/// Whitespace inside a placeholder is ignored, so `{ title }` and `{title}`
/// are equivalent. A lone `}` passes through unchanged.
pub fn render(template: &str, vars: &HashMap<String, String>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + template.len() / 4);
    let mut rest = template;
    let mut consumed = 0usize;

    loop {
        let Some(open) = rest.find(['{', '}']) else {
            out.push_str(rest);
            return Ok(out);
        };

        out.push_str(&rest[..open]);
        let brace_offset = consumed + open;
        let after = &rest[open + 1..];

        if rest.as_bytes()[open] == b'}' {
            // "}}" is an escaped literal; a lone "}" is ordinary text.
            out.push('}');
            let skip = if after.starts_with('}') { 2 } else { 1 };
            consumed += open + skip;
            rest = &rest[open + skip..];
            continue;
        }

        if after.starts_with('{') {
            out.push('{');
            consumed += open + 2;
            rest = &rest[open + 2..];
            continue;
        }

        let Some(close) = after.find('}') else {
            return Err(TemplateError::UnclosedPlaceholder(brace_offset));
        };

        let name = after[..close].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyPlaceholder(brace_offset));
        }

        let value = vars
            .get(name)
            .ok_or_else(|| TemplateError::MissingVariable(name.to_string()))?;
        out.push_str(value);

        consumed += open + close + 2;
        rest = &rest[open + close + 2..];
    }
}
