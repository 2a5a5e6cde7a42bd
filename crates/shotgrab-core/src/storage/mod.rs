//! Output layout on disk.
//!
//! One dated directory per run (`YYYY-MM-DD`, then `YYYY-MM-DD_1`, ...) under an
//! explicit base directory, holding `image.png`, `image_1.png`, ... Files are
//! written to a `.part` temp file first and renamed into place.

mod dir_name;
mod writer;

pub use dir_name::{choose_output_dir, create_output_dir, next_dir_name, today_string};
pub use writer::{image_filename, save_image};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `image.png` → `image.png.part`).
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    std::path::PathBuf::from(o)
}
