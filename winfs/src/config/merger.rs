//! Configuration merging and precedence handling.
//!
//! Sections merge field by field: a field set in a higher-precedence source
//! replaces the lower one, and unset fields fall through. Argument lists are
//! replaced as a whole, never concatenated.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, ExtractorConfig, ListingConfig, SubstConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use winfs::config::{Config, ConfigMerger, SubstConfig};
///
/// let low = Config {
///     subst: Some(SubstConfig { program: Some("low".to_string()), args: None }),
///     ..Default::default()
/// };
/// let high = Config {
///     subst: Some(SubstConfig { program: Some("high".to_string()), args: None }),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.subst_program(), "high");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(ref source_subst) = source.subst {
            let subst = target.subst.get_or_insert_with(Default::default);
            Self::merge_subst(subst, source_subst);
        }

        if let Some(ref source_extractor) = source.extractor {
            let extractor = target.extractor.get_or_insert_with(Default::default);
            Self::merge_extractor(extractor, source_extractor);
        }

        if let Some(ref source_listing) = source.listing {
            let listing = target.listing.get_or_insert_with(Default::default);
            Self::merge_listing(listing, source_listing);
        }
    }

    fn merge_subst(target: &mut SubstConfig, source: &SubstConfig) {
        if source.program.is_some() {
            target.program.clone_from(&source.program);
        }
        if source.args.is_some() {
            target.args.clone_from(&source.args);
        }
    }

    fn merge_extractor(target: &mut ExtractorConfig, source: &ExtractorConfig) {
        if source.external.is_some() {
            target.external.clone_from(&source.external);
        }
        if source.args.is_some() {
            target.args.clone_from(&source.args);
        }
    }

    fn merge_listing(target: &mut ListingConfig, source: &ListingConfig) {
        if source.order.is_some() {
            target.order = source.order;
        }
        if source.pattern.is_some() {
            target.pattern.clone_from(&source.pattern);
        }
    }
}
