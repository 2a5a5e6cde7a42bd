//! Integration test: full runs against a local page/image server through the curl client.

mod common;

use common::page_server::{self, screenshot_page, Route};
use shotgrab_core::config::HttpConfig;
use shotgrab_core::fetch::{CurlClient, DEFAULT_USER_AGENT};
use shotgrab_core::sink::{Level, LogSink};
use shotgrab_core::url_model::{DomainPolicy, UrlInput};
use shotgrab_core::Pipeline;
use std::sync::Mutex;
use tempfile::tempdir;

const D: &str = "2023-10-14";

#[derive(Default)]
struct Recorder(Mutex<Vec<(Level, String)>>);

impl LogSink for Recorder {
    fn emit(&self, level: Level, message: &str) {
        self.0.lock().unwrap().push((level, message.to_string()));
    }
}

fn local_policy() -> DomainPolicy {
    DomainPolicy::new("127.0.0.1")
}

#[test]
fn run_saves_resolved_images_in_order() {
    let images = page_server::start(vec![
        ("/img/one.png", Route::png(b"\x89PNG-one")),
        ("/img/three.png", Route::png(b"\x89PNG-three")),
    ]);
    let pages = page_server::start(vec![
        ("/one", Route::html(screenshot_page(&images.url("/img/one.png")))),
        ("/two", Route::html("<html><body>screenshot removed</body></html>")),
        ("/three", Route::html(screenshot_page(&images.url("/img/three.png")))),
        ("/gone", Route::status("404 Not Found")),
    ]);

    let input = UrlInput::Blob(format!(
        "{}\n{}\n{}\n{}\nhttps://example.com/x",
        pages.url("/one"),
        pages.url("/two"),
        pages.url("/gone"),
        pages.url("/three"),
    ));

    let base = tempdir().unwrap();
    let client = CurlClient::new(DEFAULT_USER_AGENT, HttpConfig::default());
    let sink = Recorder::default();
    let pipeline = Pipeline::new(&client, &client, &sink, local_policy());
    let summary = pipeline.run_dated(&input, base.path(), D).unwrap();

    let out = base.path().join(D);
    assert_eq!(summary.output_dir.as_deref(), Some(out.as_path()));
    assert_eq!(summary.resolved, 2);
    assert_eq!(summary.skipped_inputs.len(), 3);
    assert_eq!(summary.failed_downloads, 0);
    assert_eq!(std::fs::read(out.join("image.png")).unwrap(), b"\x89PNG-one");
    assert_eq!(std::fs::read(out.join("image_1.png")).unwrap(), b"\x89PNG-three");

    for req in pages.seen() {
        assert_eq!(req.user_agent.as_deref(), Some(DEFAULT_USER_AGENT), "page {}", req.path);
    }
    for req in images.seen() {
        assert!(req.user_agent.is_none(), "image {} sent a User-Agent", req.path);
    }

    let logs = sink.0.lock().unwrap();
    assert!(logs
        .iter()
        .any(|(_, m)| m.contains("no connection to website (HTTP 404)")));
    assert!(logs.iter().any(|(_, m)| m.starts_with("Not valid input: https://example.com/x")));
}

#[test]
fn run_with_no_resolved_sources_creates_nothing() {
    let pages = page_server::start(vec![("/blank", Route::html("<html></html>"))]);
    let base = tempdir().unwrap();
    let client = CurlClient::default();
    let sink = Recorder::default();
    let pipeline = Pipeline::new(&client, &client, &sink, local_policy());

    let input = UrlInput::List(vec![pages.url("/blank"), pages.url("/missing")]);
    let summary = pipeline.run_dated(&input, base.path(), D).unwrap();

    assert!(summary.is_empty());
    assert_eq!(std::fs::read_dir(base.path()).unwrap().count(), 0);
}

#[test]
fn failed_image_download_leaves_gap_and_second_run_gets_suffix() {
    let images = page_server::start(vec![("/ok.png", Route::png(b"ok"))]);
    let pages = page_server::start(vec![
        ("/a", Route::html(screenshot_page(&images.url("/forbidden.png")))),
        ("/b", Route::html(screenshot_page(&images.url("/ok.png")))),
    ]);
    let base = tempdir().unwrap();
    let client = CurlClient::default();
    let sink = Recorder::default();
    let pipeline = Pipeline::new(&client, &client, &sink, local_policy());
    let input = UrlInput::List(vec![pages.url("/a"), pages.url("/b")]);

    let first = pipeline.run_dated(&input, base.path(), D).unwrap();
    assert_eq!(first.failed_downloads, 1);
    let out = base.path().join(D);
    assert!(!out.join("image.png").exists());
    assert_eq!(std::fs::read(out.join("image_1.png")).unwrap(), b"ok");

    let second = pipeline.run_dated(&input, base.path(), D).unwrap();
    assert_eq!(second.output_dir, Some(base.path().join("2023-10-14_1")));
}
