//! Command implementation for quill.
//!
//! There is a single command: generate one article. The pipeline is linear
//! with no branching back: build the prompt, invoke the model, validate the
//! response, write the artifact, report. The post-model half lives in
//! `run_generation` so it can be exercised with canned responses and a
//! fixed clock, without a live backend.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::model::{ModelClient, SamplingOptions};
use crate::output;
use crate::prompt;
use crate::request::GenerationRequest;
use crate::runlog::{self, RunRecord};
use crate::validate::{self, ArticleReport};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Generate one article from CLI input.
///
/// Validation issues are printed as warnings and do not affect the exit
/// status; only fatal conditions (config, backend, filesystem) error out.
pub fn generate(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    let request = build_request(&cli, &config);
    let user_prompt = prompt::build_user_prompt(&request)?;

    if cli.dry_run {
        println!("{}", user_prompt);
        return Ok(());
    }

    let model = cli.model.clone().unwrap_or_else(|| config.model.clone());
    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let client = ModelClient::new(
        config.base_url.clone(),
        model.clone(),
        SamplingOptions::from_config(&config),
    )?;

    let started = Instant::now();
    let markdown = client.chat(prompt::SYSTEM_PROMPT, &user_prompt)?;
    let duration_ms = started.elapsed().as_millis() as u64;

    let (report, path) = run_generation(&markdown, &output_dir, Utc::now())?;

    println!("Saved: {}", path.display());
    if !report.issues.is_empty() {
        println!();
        println!("Validation notes:");
        for issue in &report.issues {
            println!("  - {}", issue);
        }
    }

    // Best-effort audit trail; a failed append must not fail the run.
    let record = RunRecord::new(
        request.title.clone(),
        model,
        report.slug.clone(),
        path.display().to_string(),
        report.issues.len(),
        duration_ms,
    );
    if let Err(e) = runlog::append_run(&output_dir, &record) {
        eprintln!("Warning: failed to append run log entry: {}", e);
    }

    Ok(())
}

/// Merge CLI flags and config defaults into a generation request.
fn build_request(cli: &Cli, config: &Config) -> GenerationRequest {
    GenerationRequest::new(
        cli.title.clone(),
        cli.words,
        cli.audience
            .clone()
            .unwrap_or_else(|| config.default_audience.clone()),
        cli.geo.clone().unwrap_or_else(|| config.default_geo.clone()),
        cli.primary_keyword.clone(),
        cli.secondary_keywords.clone(),
    )
}

/// Validate a raw model response and persist it.
///
/// This is the network-free tail of the pipeline: validation with the given
/// clock, output directory initialization, then the write. The full raw
/// text is persisted even when the report carries issues.
pub(crate) fn run_generation(
    markdown: &str,
    output_dir: &Path,
    now: DateTime<Utc>,
) -> Result<(ArticleReport, PathBuf)> {
    let report = validate::validate_article(markdown, now);

    output::init_output_dir(output_dir)?;
    let path = output::save_article(output_dir, &report.slug, markdown)?;

    Ok((report, path))
}
