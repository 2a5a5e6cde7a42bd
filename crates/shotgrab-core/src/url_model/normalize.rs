//! Canonical URL form: trimmed, with an explicit scheme.

/// Scheme prepended to inputs that do not already start with `http`.
const DEFAULT_SCHEME: &str = "https://";

/// Raw URL input as handed over by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlInput {
    /// Exactly one URL; never split.
    Single(String),
    /// Ordered list of URLs, one per element.
    List(Vec<String>),
    /// Free text (file contents, text field, stdin) split on any whitespace.
    Blob(String),
}

impl UrlInput {
    /// Returns canonical URLs in input order. Duplicates are kept.
    ///
    /// Blob input drops empty tokens; `Single` and `List` entries are
    /// normalized as given, so an all-blank entry becomes `https://` and is
    /// rejected later by validation.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            UrlInput::Single(url) => vec![normalize_url(url)],
            UrlInput::List(urls) => urls.iter().map(|u| normalize_url(u)).collect(),
            UrlInput::Blob(text) => text.split_whitespace().map(normalize_url).collect(),
        }
    }
}

impl From<Vec<String>> for UrlInput {
    fn from(urls: Vec<String>) -> Self {
        UrlInput::List(urls)
    }
}

/// Strips surrounding whitespace and prepends `https://` unless the value
/// already starts with `http`.
///
/// - `normalize_url(" prnt.sc/abc ")` → `"https://prnt.sc/abc"`
/// - `normalize_url("http://prnt.sc/abc")` → `"http://prnt.sc/abc"`
pub fn normalize_url(raw: &str) -> String {
    let url = raw.trim();
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{url}")
    }
}
