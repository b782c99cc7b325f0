//! CLI subcommand implementations.

pub mod export;
pub mod show;
pub mod summary;
mod util;

pub use util::load_session;
