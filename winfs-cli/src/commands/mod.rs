//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `list`: Ordered, pattern-filtered directory listing
//! - `latest`: Most recently modified matching entry
//! - `delete`: Recursive directory deletion
//! - `extract`: Archive extraction through the configured backend
//! - `subst`: Drive substitution table and path translation
//! - `completions`: Shell completion scripts

pub mod completions;
pub mod delete;
pub mod extract;
pub mod latest;
pub mod list;
pub mod subst;

pub use completions::CompletionsCommand;
pub use delete::DeleteCommand;
pub use extract::ExtractCommand;
pub use latest::LatestCommand;
pub use list::ListCommand;
pub use subst::SubstCommand;
