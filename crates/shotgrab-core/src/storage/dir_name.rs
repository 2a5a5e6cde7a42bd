//! Collision-free dated directory names.

use crate::error::ConfigurationError;
use std::fs;
use std::path::{Path, PathBuf};

/// Today's local date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Numeric suffix an existing entry claims for `today`, if any.
///
/// `today` itself claims 0. Any other entry starting with `today` claims the
/// segment after its last `_` when that segment is all digits, so `today_3` and
/// `today_5_7` claim 3 and 7. Other dates, `today_xyz` and `today-copy` claim nothing.
fn claimed_suffix(entry: &str, today: &str) -> Option<u64> {
    let rest = entry.strip_prefix(today)?;
    if rest.is_empty() {
        return Some(0);
    }
    let (_, digits) = rest.rsplit_once('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Picks a directory name for `today` that collides with none of `entries`.
///
/// Returns `today` if nothing claims it, otherwise `today_<n>` with `n` one past
/// the highest claimed suffix (at least 1). Pure: same inputs, same answer.
pub fn next_dir_name<I, S>(entries: I, today: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let next = entries
        .into_iter()
        .filter_map(|e| claimed_suffix(e.as_ref(), today))
        .map(|n| n.saturating_add(1))
        .max();

    match next {
        None => today.to_string(),
        Some(n) => format!("{}_{}", today, n.max(1)),
    }
}

/// Lists `base_dir` and returns the full path of the next free dated directory.
/// Does not create it.
pub fn choose_output_dir(base_dir: &Path, today: &str) -> Result<PathBuf, ConfigurationError> {
    if !base_dir.is_dir() {
        return Err(ConfigurationError::NotADirectory(base_dir.to_path_buf()));
    }
    let list_err = |source: std::io::Error| ConfigurationError::ListDir {
        path: base_dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(base_dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    let name = next_dir_name(&names, today);
    tracing::debug!(base = %base_dir.display(), %name, "chose output directory");
    Ok(base_dir.join(name))
}

/// Creates exactly `path` (not its parents). Fails if it already exists.
pub fn create_output_dir(path: &Path) -> Result<(), ConfigurationError> {
    fs::create_dir(path).map_err(|source| ConfigurationError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
