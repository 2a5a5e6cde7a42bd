//! `shotgrab resolve` – print image sources without downloading.

use anyhow::Result;
use shotgrab_core::config::ShotgrabConfig;
use shotgrab_core::fetch::CurlClient;
use shotgrab_core::resolver::resolve_sources;
use shotgrab_core::sink::{ConsoleSink, TeeSink, TracingSink};
use shotgrab_core::url_model::{DomainPolicy, UrlInput};

/// Prints `<image source>\t<page url>` per resolved page; skips go to stderr.
pub fn run_resolve(cfg: &ShotgrabConfig, input: &UrlInput) -> Result<()> {
    let client = CurlClient::new(&cfg.user_agent, cfg.http.clone());
    let sink = TeeSink::new(ConsoleSink::new(std::io::stderr()), TracingSink);
    let policy = DomainPolicy::new(&cfg.allowed_domain);

    let resolved = resolve_sources(&client, &policy, &input.normalize(), &sink);
    for record in &resolved.records {
        println!("{}\t{}", record.image_source, record.page_url);
    }
    Ok(())
}
