//! Syntactic and domain checks for canonical URLs. Both fail closed.

use crate::error::ValidationError;
use url::Url;

/// Image host whose pages carry the screenshot viewer.
pub const DEFAULT_ALLOWED_DOMAIN: &str = "prnt.sc";

/// Host allow-list: a URL is accepted when its host contains `allowed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPolicy {
    pub allowed: String,
}

impl DomainPolicy {
    pub fn new(allowed: impl Into<String>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_DOMAIN)
    }
}

/// True if `url` parses with a non-empty scheme and a non-empty host.
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            !parsed.scheme().is_empty() && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// True if the host of `url` contains `allowed`. Unparseable URLs are rejected.
pub fn is_allowed_domain(url: &str, allowed: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| h.contains(allowed)))
        .unwrap_or(false)
}

/// Runs both checks; the error says which one failed.
pub fn validate(url: &str, policy: &DomainPolicy) -> Result<(), ValidationError> {
    if !is_valid_url(url) {
        return Err(ValidationError::Malformed(url.to_string()));
    }
    if !is_allowed_domain(url, &policy.allowed) {
        return Err(ValidationError::DomainNotAllowed {
            url: url.to_string(),
            allowed: policy.allowed.clone(),
        });
    }
    Ok(())
}
