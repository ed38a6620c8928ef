//! The fixed instruction templates sent to the model.
//!
//! The system prompt sets the editorial persona and hard formatting rules;
//! the user template carries the per-article parameters. Placeholder names
//! must match the variables produced by `super::template_vars`.

/// System instruction sent with every generation request.
pub const SYSTEM_PROMPT: &str = r#"You are an expert SEO content editor. You write fact-aware, reader-first articles that rank.
Follow these rules strictly:
- Output ONLY Markdown for the final article; no explanations or preambles.
- Include at the top a YAML front matter block with: meta_title, meta_description, slug, primary_keyword, secondary_keywords, word_count_target.
- Keep meta_title <= 60 chars; meta_description <= 160 chars.
- Use H2/H3 structure, short paragraphs, bullets, and numbered lists where useful.
- Keep keyword usage natural (no stuffing).
- End with a conclusion and a 4-6 question FAQ.
- If you insert any statistic or claim, mark it with [citation needed] (since you're offline).
"#;

/// User instruction template. Rendered with the request's fields.
pub const USER_TEMPLATE: &str = r#"Title: "{title}"

Write a {word_count}-word SEO blog for the above title.

Constraints:
- Target audience: {audience}
- Tone: simple, informative, engaging (as if explaining to a 20-year-old)
- Geography: {geo}
- Primary keyword: {primary_keyword}
- 5-8 secondary keywords: {secondary_keywords}

Format:
1) YAML front matter with: meta_title, meta_description, slug, primary_keyword, secondary_keywords, word_count_target
2) Intro (50-120 words)
3) Body with clear H2/H3s including the primary keyword naturally in at least one H2
4) Practical tips, checklists, and examples
5) Conclusion
6) FAQ (4-6 Q&As)

Rules:
- Do not include "Outline" or "Draft" sections.
- Do not show your reasoning or chain-of-thought.
- Keep meta fields within limits. If needed, shorten.
"#;
