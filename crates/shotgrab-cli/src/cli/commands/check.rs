//! `shotgrab check` – normalize and validate URLs offline.

use anyhow::Result;
use shotgrab_core::config::ShotgrabConfig;
use shotgrab_core::url_model::{validate, DomainPolicy, UrlInput};

/// One line per canonical URL: `ok\t<url>` or `invalid\t<url>\t<reason>`.
pub fn run_check(cfg: &ShotgrabConfig, input: &UrlInput) -> Result<()> {
    let policy = DomainPolicy::new(&cfg.allowed_domain);
    for line in check_lines(&policy, input) {
        println!("{line}");
    }
    Ok(())
}

fn check_lines(policy: &DomainPolicy, input: &UrlInput) -> Vec<String> {
    input
        .normalize()
        .into_iter()
        .map(|url| match validate(&url, policy) {
            Ok(()) => format!("ok\t{url}"),
            Err(e) => format!("invalid\t{url}\t{e}"),
        })
        .collect()
}
