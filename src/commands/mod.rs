//! CLI command implementations.
//!
//! Each command carries an explicit config struct so the pipeline can be
//! driven directly from tests without touching process-wide state.

pub mod build;
pub mod selector;

pub use build::{build_database, BuildConfig, BuildReport};
pub use selector::print_selectors;
