//! `shotgrab run` – resolve pages and save the screenshots.

use anyhow::{Context, Result};
use shotgrab_core::config::ShotgrabConfig;
use shotgrab_core::fetch::CurlClient;
use shotgrab_core::sink::{ConsoleSink, TeeSink, TracingSink};
use shotgrab_core::url_model::{DomainPolicy, UrlInput};
use shotgrab_core::{Pipeline, RunSummary};
use std::path::PathBuf;

/// Base directory: `--output-dir`, else config `output_dir`, else the current directory.
pub(crate) fn base_dir(cfg: &ShotgrabConfig, flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag.or_else(|| cfg.output_dir.clone()) {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("current directory"),
    }
}

pub fn run_download(cfg: &ShotgrabConfig, input: &UrlInput, output_dir: Option<PathBuf>) -> Result<()> {
    let base = base_dir(cfg, output_dir)?;
    let client = CurlClient::new(&cfg.user_agent, cfg.http.clone());
    let sink = TeeSink::new(ConsoleSink::stdout(), TracingSink);
    let pipeline = Pipeline::new(&client, &client, &sink, DomainPolicy::new(&cfg.allowed_domain));

    let summary = pipeline
        .run(input, &base)
        .with_context(|| format!("download into {}", base.display()))?;
    println!("{}", describe(&summary));
    Ok(())
}

fn describe(summary: &RunSummary) -> String {
    match &summary.output_dir {
        None => format!(
            "No screenshots resolved ({} input(s) skipped); nothing written.",
            summary.skipped_inputs.len()
        ),
        Some(dir) => format!(
            "Saved {} of {} screenshot(s) to {} ({} input(s) skipped, {} download(s) failed).",
            summary.saved.len(),
            summary.resolved,
            dir.display(),
            summary.skipped_inputs.len(),
            summary.failed_downloads
        ),
    }
}
