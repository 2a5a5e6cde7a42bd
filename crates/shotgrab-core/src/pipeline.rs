//! The run: resolve sources, create the dated directory once, download everything.
//!
//! ```text
//! START -> RESOLVE_SOURCES -> (empty? -> DONE) -> CREATE_DIRECTORY -> DOWNLOAD_ALL -> DONE
//! ```
//!
//! Per-URL failures are logged and skipped. Only choosing or creating the output
//! directory can fail the run.

use crate::downloader::{download_all, SaveOutcome};
use crate::error::ConfigurationError;
use crate::resolver::{resolve_sources, ImageFetcher, PageFetcher, SkippedInput};
use crate::sink::LogSink;
use crate::storage::{choose_output_dir, create_output_dir, today_string};
use crate::url_model::{DomainPolicy, UrlInput};
use std::path::{Path, PathBuf};

/// What a finished run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Created directory; `None` when nothing resolved.
    pub output_dir: Option<PathBuf>,
    /// Number of inputs that resolved to an image source.
    pub resolved: usize,
    /// Files written, in resolved order.
    pub saved: Vec<PathBuf>,
    /// Inputs dropped during resolution.
    pub skipped_inputs: Vec<SkippedInput>,
    /// Resolved sources whose download or write failed.
    pub failed_downloads: usize,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.output_dir.is_none()
    }
}

/// Wires the collaborators together. Holds no per-run state.
pub struct Pipeline<'a, P: ?Sized, I: ?Sized, S: ?Sized> {
    pages: &'a P,
    images: &'a I,
    sink: &'a S,
    policy: DomainPolicy,
}

impl<'a, P, I, S> Pipeline<'a, P, I, S>
where
    P: PageFetcher + ?Sized,
    I: ImageFetcher + ?Sized,
    S: LogSink + ?Sized,
{
    pub fn new(pages: &'a P, images: &'a I, sink: &'a S, policy: DomainPolicy) -> Self {
        Self {
            pages,
            images,
            sink,
            policy,
        }
    }

    /// Runs with today's local date.
    pub fn run(&self, input: &UrlInput, base_dir: &Path) -> Result<RunSummary, ConfigurationError> {
        self.run_dated(input, base_dir, &today_string())
    }

    /// Runs with an explicit `YYYY-MM-DD` date string.
    ///
    /// The output directory name is chosen before any network traffic, so a
    /// bad base directory fails fast; it is only created once at least one
    /// source resolved.
    pub fn run_dated(
        &self,
        input: &UrlInput,
        base_dir: &Path,
        today: &str,
    ) -> Result<RunSummary, ConfigurationError> {
        let output_dir = choose_output_dir(base_dir, today)?;
        let urls = input.normalize();
        tracing::info!(count = urls.len(), base = %base_dir.display(), "starting run");

        let resolved = resolve_sources(self.pages, &self.policy, &urls, self.sink);

        if resolved.records.is_empty() {
            self.sink.info("No screenshots resolved; nothing to download");
            return Ok(RunSummary {
                skipped_inputs: resolved.skipped,
                ..RunSummary::default()
            });
        }

        create_output_dir(&output_dir)?;
        tracing::info!(dir = %output_dir.display(), "created output directory");

        let outcomes = download_all(self.images, &output_dir, &resolved.records, self.sink);
        let mut saved = Vec::new();
        let mut failed_downloads = 0;
        for outcome in outcomes {
            match outcome {
                SaveOutcome::Saved { path, .. } => saved.push(path),
                SaveOutcome::Skipped { .. } => failed_downloads += 1,
            }
        }
        self.sink.info("Screenshots downloaded");

        Ok(RunSummary {
            output_dir: Some(output_dir),
            resolved: resolved.records.len(),
            saved,
            skipped_inputs: resolved.skipped,
            failed_downloads,
        })
    }
}
