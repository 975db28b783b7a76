//! CLI command handlers, one per file.

mod completions;
mod import;
mod path;
mod show;
mod url;

pub use completions::run_completions;
pub use import::run_import;
pub use path::run_path;
pub use show::run_show;
pub use url::run_url;

#[cfg(test)]
pub(crate) use url::resolve_all;
