//! URL input handling: normalization to canonical form and validation.
//!
//! Callers pick the input shape explicitly through [`UrlInput`]; a bare string is
//! never guessed to be a blob.

mod normalize;
mod validate;

pub use normalize::{normalize_url, UrlInput};
pub use validate::{is_allowed_domain, is_valid_url, validate, DomainPolicy, DEFAULT_ALLOWED_DOMAIN};
