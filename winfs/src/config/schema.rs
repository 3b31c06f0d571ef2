//! Configuration schema definitions.
//!
//! This module defines the configuration structure for winfs: the drive
//! substitution query command, the archive extractor backend, and listing
//! defaults used by the command-line tool.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete configuration structure.
///
/// Every field is optional so that configuration from several sources can
/// be layered; unset fields fall back to built-in defaults at the point of
/// use.
///
/// # Examples
///
/// ```
/// use winfs::config::{Config, SubstConfig};
///
/// let config = Config {
///     subst: Some(SubstConfig {
///         program: Some("subst".to_string()),
///         args: None,
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.subst_program(), "subst");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Drive substitution query settings.
    pub subst: Option<SubstConfig>,

    /// Archive extraction settings.
    pub extractor: Option<ExtractorConfig>,

    /// Directory listing defaults.
    pub listing: Option<ListingConfig>,
}

impl Config {
    /// The configured subst program, or `subst`.
    #[must_use]
    pub fn subst_program(&self) -> &str {
        self.subst
            .as_ref()
            .and_then(|s| s.program.as_deref())
            .unwrap_or(crate::subst::DEFAULT_SUBST_PROGRAM)
    }

    /// The configured listing order, or [`ListOrder::Name`].
    #[must_use]
    pub fn list_order(&self) -> ListOrder {
        self.listing
            .as_ref()
            .and_then(|l| l.order)
            .unwrap_or_default()
    }

    /// The configured listing pattern, or the empty match-all pattern.
    #[must_use]
    pub fn list_pattern(&self) -> &str {
        self.listing
            .as_ref()
            .and_then(|l| l.pattern.as_deref())
            .unwrap_or("")
    }
}

/// Drive substitution query command.
///
/// # Examples
///
/// ```
/// use winfs::config::SubstConfig;
///
/// let config = SubstConfig::default();
/// assert!(config.program.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SubstConfig {
    /// Program printing the substitution table (default `subst`).
    pub program: Option<String>,

    /// Arguments passed to the program (default none).
    pub args: Option<Vec<String>>,
}

/// Archive extractor backend selection.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Path of an external decompressor such as `7z`.
    pub external: Option<String>,

    /// Argument template with `{archive}` and `{dest}` placeholders.
    pub args: Option<Vec<String>>,
}

/// Directory listing defaults.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// Ordering applied to listings.
    pub order: Option<ListOrder>,

    /// Regular expression filtering entry names.
    pub pattern: Option<String>,
}

/// Ordering applied to directory listings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Ascending by name.
    #[default]
    Name,
    /// Most recently modified first.
    Date,
}

impl fmt::Display for ListOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Date => write!(f, "date"),
        }
    }
}

impl FromStr for ListOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "date" => Ok(Self::Date),
            _ => Err(format!("Invalid list order: '{s}' (expected name or date)")),
        }
    }
}
