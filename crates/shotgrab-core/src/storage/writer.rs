//! Ordinal image files inside the run directory.

use super::temp_path;
use crate::error::DownloadError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Filename for the record at `index` in the resolved list: `image.png`, then `image_<i>.png`.
pub fn image_filename(index: usize) -> String {
    if index == 0 {
        "image.png".to_string()
    } else {
        format!("image_{index}.png")
    }
}

/// Writes `bytes` to `<dir>/<image_filename(index)>` via a `.part` temp file.
/// Returns the final path. On failure the temp file is removed.
pub fn save_image(dir: &Path, index: usize, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
    let final_path = dir.join(image_filename(index));
    let tmp = temp_path(&final_path);

    let result = write_file(&tmp, bytes).and_then(|()| fs::rename(&tmp, &final_path));
    if let Err(cause) = result {
        let _ = fs::remove_file(&tmp);
        return Err(DownloadError::Write {
            path: final_path,
            cause,
        });
    }
    Ok(final_path)
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = fs::File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}
