//! Configuration validation.
//!
//! This module checks merged configuration before any component is built
//! from it.

use crate::config::schema::{Config, ExtractorConfig, ListingConfig, SubstConfig};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use winfs::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref subst) = config.subst {
            Self::validate_subst(subst)?;
        }

        if let Some(ref extractor) = config.extractor {
            Self::validate_extractor(extractor)?;
        }

        if let Some(ref listing) = config.listing {
            Self::validate_listing(listing)?;
        }

        Ok(())
    }

    fn validate_subst(subst: &SubstConfig) -> Result<()> {
        if let Some(ref program) = subst.program {
            Self::require_non_empty("subst.program", program)?;
        }
        Ok(())
    }

    fn validate_extractor(extractor: &ExtractorConfig) -> Result<()> {
        if let Some(ref external) = extractor.external {
            Self::require_non_empty("extractor.external", external)?;
        }

        if let Some(ref args) = extractor.args {
            if !args.iter().any(|arg| arg.contains("{archive}")) {
                return Err(Error::Validation {
                    field: "extractor.args".into(),
                    message: "Argument template must contain {archive}".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_listing(listing: &ListingConfig) -> Result<()> {
        if let Some(ref pattern) = listing.pattern {
            if let Err(e) = regex::Regex::new(pattern) {
                return Err(Error::Validation {
                    field: "listing.pattern".into(),
                    message: format!("Invalid regular expression: {e}"),
                });
            }
        }
        Ok(())
    }

    fn require_non_empty(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }
        Ok(())
    }
}
