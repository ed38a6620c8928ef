//! CLI argument parsing for quill.
//!
//! Uses clap derive macros for declarative argument definitions. There are
//! no subcommands: one invocation generates one article. The command
//! implementation lives in the `commands` module.

use crate::request::DEFAULT_WORD_COUNT;
use clap::Parser;
use std::path::PathBuf;

/// Quill: SEO blog article generator backed by a local Ollama model.
///
/// Builds an SEO-oriented prompt from the title and options, requests one
/// completion from the model, sanity-checks the returned Markdown, and
/// writes it to `<output-dir>/<slug>.md`. Validation problems are reported
/// as warnings; the article is written regardless.
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Title of the article to generate.
    pub title: String,

    /// Target word count for the article.
    #[arg(long, default_value_t = DEFAULT_WORD_COUNT)]
    pub words: u32,

    /// Audience description (default from config).
    #[arg(long)]
    pub audience: Option<String>,

    /// Geographic focus (default from config).
    #[arg(long)]
    pub geo: Option<String>,

    /// Primary SEO keyword. Defaults to the lowercased title.
    #[arg(long)]
    pub primary_keyword: Option<String>,

    /// Secondary SEO keywords, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub secondary_keywords: Vec<String>,

    /// Model tag to use (overrides config).
    #[arg(long)]
    pub model: Option<String>,

    /// Directory to write the article into (overrides config).
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Path to a config file (default: ./quill.yaml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the built prompt and exit without calling the model.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_minimal() {
        let cli = Cli::try_parse_from(["quill", "Best Budget Laptops"]).unwrap();

        assert_eq!(cli.title, "Best Budget Laptops");
        assert_eq!(cli.words, 1500);
        assert_eq!(cli.audience, None);
        assert_eq!(cli.geo, None);
        assert_eq!(cli.primary_keyword, None);
        assert!(cli.secondary_keywords.is_empty());
        assert_eq!(cli.model, None);
        assert_eq!(cli.output_dir, None);
        assert_eq!(cli.config, None);
        assert!(!cli.dry_run);
    }

    #[test]
    fn parse_missing_title_fails() {
        assert!(Cli::try_parse_from(["quill"]).is_err());
    }

    #[test]
    fn parse_words_override() {
        let cli = Cli::try_parse_from(["quill", "Title", "--words", "800"]).unwrap();
        assert_eq!(cli.words, 800);
    }

    #[test]
    fn parse_non_numeric_words_fails() {
        assert!(Cli::try_parse_from(["quill", "Title", "--words", "lots"]).is_err());
    }

    #[test]
    fn parse_secondary_keywords_comma_separated() {
        let cli = Cli::try_parse_from([
            "quill",
            "Title",
            "--secondary-keywords",
            "cheap laptops,student laptops",
        ])
        .unwrap();

        assert_eq!(
            cli.secondary_keywords,
            vec!["cheap laptops", "student laptops"]
        );
    }

    #[test]
    fn parse_full() {
        let cli = Cli::try_parse_from([
            "quill",
            "Best Budget Laptops",
            "--words",
            "2000",
            "--audience",
            "students",
            "--geo",
            "US",
            "--primary-keyword",
            "budget laptops",
            "--secondary-keywords",
            "a,b",
            "--model",
            "mistral",
            "--output-dir",
            "drafts",
            "--config",
            "custom.yaml",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.title, "Best Budget Laptops");
        assert_eq!(cli.words, 2000);
        assert_eq!(cli.audience.as_deref(), Some("students"));
        assert_eq!(cli.geo.as_deref(), Some("US"));
        assert_eq!(cli.primary_keyword.as_deref(), Some("budget laptops"));
        assert_eq!(cli.secondary_keywords, vec!["a", "b"]);
        assert_eq!(cli.model.as_deref(), Some("mistral"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("drafts")));
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
        assert!(cli.dry_run);
    }
}
