//! Layered YAML configuration.
//!
//! A [`Config`] names the program that prints the drive substitution table,
//! an optional external decompressor, and the defaults the command-line tool
//! uses for listings. Every field is optional; [`ConfigBuilder`] stacks the
//! sources below, later entries overriding earlier ones field by field:
//!
//! | Source | Location |
//! |--------|----------|
//! | user | `~/.winfs/config.yaml`, or `config.yaml` in an explicit directory |
//! | project | nearest `winfs.yaml` at or above the working directory |
//! | local | `winfs.local.yaml` beside it |
//! | environment | `WINFS_SUBST_PROGRAM`, `WINFS_LIST_ORDER` and friends |
//! | code | [`ConfigBuilder::with_config`] |
//!
//! The merged result is checked by [`ConfigValidator`] before it is returned.
//!
//! ```no_run
//! use std::path::Path;
//! use winfs::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("C:/projects/tool"))
//!     .build()?;
//! println!("subst program: {}", config.subst_program());
//! # Ok::<(), winfs::Error>(())
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, ExtractorConfig, ListOrder, ListingConfig, SubstConfig};
pub use validator::ConfigValidator;
