pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod resolver;
pub mod sink;
pub mod storage;
pub mod url_model;

pub use pipeline::{Pipeline, RunSummary};
