//! Generation run log.
//!
//! Append-only NDJSON records of completed generation runs, stored at
//! `<output-dir>/.quill/runs.ndjson` (one JSON object per line). The log is
//! an audit trail, not state: appends are best-effort, and a failed append
//! prints a warning at the call site without failing the run.
//!
//! # Record Format
//!
//! - `ts`: RFC3339 timestamp
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `title`, `model`, `slug`, `path`: what was generated and where
//! - `issue_count`: number of validation warnings recorded
//! - `duration_ms`: wall-clock generation time

use crate::error::{QuillError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One completed generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// RFC3339 timestamp when the run completed.
    pub ts: DateTime<Utc>,

    /// Who ran the generation (e.g., `user@HOST`).
    pub actor: String,

    /// The requested article title.
    pub title: String,

    /// The model tag used.
    pub model: String,

    /// The resolved slug.
    pub slug: String,

    /// Path of the written article.
    pub path: String,

    /// Number of validation issues recorded.
    pub issue_count: usize,

    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

impl RunRecord {
    /// Create a record stamped with the current time and actor.
    pub fn new(
        title: impl Into<String>,
        model: impl Into<String>,
        slug: impl Into<String>,
        path: impl Into<String>,
        issue_count: usize,
        duration_ms: u64,
    ) -> Self {
        Self {
            ts: Utc::now(),
            actor: actor_string(),
            title: title.into(),
            model: model.into(),
            slug: slug.into(),
            path: path.into(),
            issue_count,
            duration_ms,
        }
    }

    /// Serialize to a single-line JSON string for NDJSON appending.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            QuillError::UserError(format!("failed to serialize run record to JSON: {}", e))
        })
    }
}

/// Get the actor string for run records.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Path of the run log file under an output directory.
pub fn runs_file_path(output_dir: &Path) -> PathBuf {
    output_dir.join(".quill").join("runs.ndjson")
}

/// Append a record to the run log under the given output directory.
///
/// Creates the `.quill` directory on first use. Each append results in one
/// line with a trailing newline.
pub fn append_run(output_dir: &Path, record: &RunRecord) -> Result<()> {
    let line = record.to_ndjson_line()?;

    let runs_file = runs_file_path(output_dir);
    if let Some(parent) = runs_file.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            QuillError::OutputError(format!(
                "failed to create run log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&runs_file)
        .map_err(|e| {
            QuillError::OutputError(format!(
                "failed to open run log '{}': {}",
                runs_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", line).map_err(|e| {
        QuillError::OutputError(format!(
            "failed to append to run log '{}': {}",
            runs_file.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_record() -> RunRecord {
        RunRecord::new(
            "Best Budget Laptops",
            "llama3:8b",
            "best-budget-laptops",
            "output/best-budget-laptops.md",
            2,
            4200,
        )
    }

    #[test]
    fn actor_contains_separator() {
        let record = test_record();
        assert!(record.actor.contains('@'));
    }

    #[test]
    fn ndjson_line_is_single_line_json() {
        let record = test_record();
        let line = record.to_ndjson_line().unwrap();

        assert!(!line.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["title"], "Best Budget Laptops");
        assert_eq!(parsed["issue_count"], 2);
        assert_eq!(parsed["duration_ms"], 4200);
    }

    #[test]
    fn append_creates_log_and_accumulates_lines() {
        let temp = TempDir::new().unwrap();

        append_run(temp.path(), &test_record()).unwrap();
        append_run(temp.path(), &test_record()).unwrap();

        let content = fs::read_to_string(runs_file_path(temp.path())).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        for line in lines {
            let record: RunRecord = serde_json::from_str(line).unwrap();
            assert_eq!(record.slug, "best-budget-laptops");
        }
    }

    #[test]
    fn runs_file_lives_under_hidden_dir() {
        let path = runs_file_path(Path::new("output"));
        assert_eq!(path, Path::new("output/.quill/runs.ndjson"));
    }
}
