//! Turning page URLs into image sources.
//!
//! The pipeline only depends on the [`PageFetcher`] and [`ImageFetcher`] traits;
//! [`crate::fetch::CurlClient`] implements both, and any
//! `Fn(&str) -> Result<..>` closure works as a stand-in.

use crate::error::{DownloadError, FetchError, SkipReason};
use crate::extract::extract_image_source;
use crate::sink::LogSink;
use crate::url_model::{validate, DomainPolicy};

/// Fetches the markup of a source page.
pub trait PageFetcher {
    fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches raw image bytes from a resolved source.
pub trait ImageFetcher {
    fn fetch_image(&self, source: &str) -> Result<Vec<u8>, DownloadError>;
}

impl<F> PageFetcher for F
where
    F: Fn(&str) -> Result<String, FetchError>,
{
    fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self(url)
    }
}

impl<F> ImageFetcher for F
where
    F: Fn(&str) -> Result<Vec<u8>, DownloadError>,
{
    fn fetch_image(&self, source: &str) -> Result<Vec<u8>, DownloadError> {
        self(source)
    }
}

/// Image source found on a page, paired with the page it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub image_source: String,
    pub page_url: String,
}

/// Outcome for one input URL.
#[derive(Debug)]
pub enum Resolution {
    Resolved(SourceRecord),
    Skipped(SkippedInput),
}

/// Input URL that produced no record, with the reason.
#[derive(Debug)]
pub struct SkippedInput {
    pub url: String,
    pub reason: SkipReason,
}

/// Result of resolving a batch: successes in input order, plus what was dropped.
#[derive(Debug, Default)]
pub struct ResolvedSources {
    pub records: Vec<SourceRecord>,
    pub skipped: Vec<SkippedInput>,
}

/// Validate, fetch and extract a single canonical URL.
pub fn resolve_one<P: PageFetcher + ?Sized>(
    fetcher: &P,
    policy: &DomainPolicy,
    url: &str,
) -> Resolution {
    let attempt = || -> Result<String, SkipReason> {
        validate(url, policy)?;
        let body = fetcher.fetch_page(url)?;
        Ok(extract_image_source(&body)?)
    };

    match attempt() {
        Ok(image_source) => Resolution::Resolved(SourceRecord {
            image_source,
            page_url: url.to_string(),
        }),
        Err(reason) => Resolution::Skipped(SkippedInput {
            url: url.to_string(),
            reason,
        }),
    }
}

/// Resolves every URL in order, one at a time. Never fails: each skip is
/// reported to `sink` and kept in [`ResolvedSources::skipped`].
pub fn resolve_sources<P, S>(
    fetcher: &P,
    policy: &DomainPolicy,
    urls: &[String],
    sink: &S,
) -> ResolvedSources
where
    P: PageFetcher + ?Sized,
    S: LogSink + ?Sized,
{
    let mut out = ResolvedSources::default();
    for url in urls {
        match resolve_one(fetcher, policy, url) {
            Resolution::Resolved(record) => {
                sink.info(&format!("Image link parsed from: {url}"));
                out.records.push(record);
            }
            Resolution::Skipped(skipped) => {
                let SkippedInput { url, reason } = &skipped;
                match reason {
                    SkipReason::Invalid(_) => sink.warn(&format!("Not valid input: {url}; {reason}")),
                    _ => sink.warn(&format!("Error with url: {url}; {reason}")),
                }
                out.skipped.push(skipped);
            }
        }
    }
    out
}
