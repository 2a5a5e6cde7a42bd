//! Download resolved images and save them under ordinal names.

use crate::error::DownloadError;
use crate::resolver::{ImageFetcher, SourceRecord};
use crate::sink::LogSink;
use crate::storage::{image_filename, save_image};
use std::path::{Path, PathBuf};

/// Outcome for one source record.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved { page_url: String, path: PathBuf },
    Skipped { page_url: String, error: DownloadError },
}

/// Fetch and persist one record as `image.png` / `image_<index>.png` in `dir`.
pub fn download_one<F: ImageFetcher + ?Sized>(
    fetcher: &F,
    dir: &Path,
    index: usize,
    record: &SourceRecord,
) -> SaveOutcome {
    let result = fetcher
        .fetch_image(&record.image_source)
        .and_then(|bytes| save_image(dir, index, &bytes));

    match result {
        Ok(path) => SaveOutcome::Saved {
            page_url: record.page_url.clone(),
            path,
        },
        Err(error) => SaveOutcome::Skipped {
            page_url: record.page_url.clone(),
            error,
        },
    }
}

/// Downloads every record in order into `dir`, which must already exist.
///
/// The filename index is the position in `records`, so a failed download leaves
/// a gap rather than shifting later names. Failures are logged and skipped.
pub fn download_all<F, S>(
    fetcher: &F,
    dir: &Path,
    records: &[SourceRecord],
    sink: &S,
) -> Vec<SaveOutcome>
where
    F: ImageFetcher + ?Sized,
    S: LogSink + ?Sized,
{
    let mut outcomes = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let outcome = download_one(fetcher, dir, index, record);
        match &outcome {
            SaveOutcome::Saved { page_url, .. } => {
                let name = image_filename(index);
                sink.info(&format!("File {page_url} saved as {name}"));
            }
            SaveOutcome::Skipped { page_url, error } => match error {
                DownloadError::Write { .. } => {
                    sink.error(&format!("Error while saving to file: {page_url}; {error}"))
                }
                _ => sink.warn(&format!("Can't download image: {page_url}; {error}")),
            },
        }
        outcomes.push(outcome);
    }
    outcomes
}
