//! CLI command handlers, one per file.

mod check;
mod completions;
mod resolve;
mod run;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use resolve::run_resolve;
pub use run::run_download;
