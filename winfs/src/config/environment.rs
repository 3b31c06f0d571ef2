//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `WINFS_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, ListOrder};
use crate::error::{Error, Result};
use std::env;

/// Overrides the subst program.
pub const SUBST_PROGRAM_ENV: &str = "WINFS_SUBST_PROGRAM";
/// Overrides the subst arguments (whitespace-separated).
pub const SUBST_ARGS_ENV: &str = "WINFS_SUBST_ARGS";
/// Overrides the external extractor program.
pub const EXTERNAL_EXTRACTOR_ENV: &str = "WINFS_EXTERNAL_EXTRACTOR";
/// Overrides the listing order.
pub const LIST_ORDER_ENV: &str = "WINFS_LIST_ORDER";
/// Overrides the listing pattern.
pub const LIST_PATTERN_ENV: &str = "WINFS_LIST_PATTERN";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use winfs::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if `WINFS_LIST_ORDER` is neither `name`
    /// nor `date`.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(program) = env::var(SUBST_PROGRAM_ENV) {
            config.subst.get_or_insert_with(Default::default).program = Some(program);
        }

        if let Ok(args) = env::var(SUBST_ARGS_ENV) {
            config.subst.get_or_insert_with(Default::default).args = Some(Self::split_args(&args));
        }

        if let Ok(program) = env::var(EXTERNAL_EXTRACTOR_ENV) {
            config.extractor.get_or_insert_with(Default::default).external = Some(program);
        }

        if let Ok(order) = env::var(LIST_ORDER_ENV) {
            let order = Self::parse_order(&order)?;
            config.listing.get_or_insert_with(Default::default).order = Some(order);
        }

        if let Ok(pattern) = env::var(LIST_PATTERN_ENV) {
            config.listing.get_or_insert_with(Default::default).pattern = Some(pattern);
        }

        Ok(())
    }

    fn parse_order(s: &str) -> Result<ListOrder> {
        s.trim().parse().map_err(|message| Error::Validation {
            field: LIST_ORDER_ENV.into(),
            message,
        })
    }

    fn split_args(s: &str) -> Vec<String> {
        s.split_whitespace().map(ToString::to_string).collect()
    }
}
