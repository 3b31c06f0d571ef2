//! Cached drive-substitution lookup and path translation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::table::SubstTable;
use crate::config::SubstConfig;
use crate::error::{Error, Result};
use crate::path::normalize::strip_dir_prefix;
use crate::path::{FsPath, SEPARATOR};
use crate::process::CommandRunner;

/// Program queried when no other is configured.
pub const DEFAULT_SUBST_PROGRAM: &str = "subst";

/// Translates paths between virtual drives and the directories behind them.
///
/// The table is queried on first use and cached for the lifetime of the
/// resolver. A successful query is cached even when it reports no mappings;
/// a failed query is not cached, so the next call queries again. Concurrent
/// first calls are serialized and run the query once.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use winfs::{FsPath, StdCommandRunner, SubstResolver, SubstTable};
///
/// let resolver = SubstResolver::new(Arc::new(StdCommandRunner));
/// resolver.seed(SubstTable::from_pairs([("P:\\", "C:\\a\\b")]));
///
/// let real = resolver.to_real(&FsPath::new("P:\\x.txt"));
/// assert_eq!(real, FsPath::new("C:\\a\\b\\x.txt"));
/// assert_eq!(resolver.to_virtual(&real), FsPath::new("P:\\x.txt"));
/// ```
pub struct SubstResolver {
    runner: Arc<dyn CommandRunner>,
    program: String,
    args: Vec<String>,
    cache: Mutex<Option<Arc<SubstTable>>>,
}

impl SubstResolver {
    /// Create a resolver that queries the default `subst` program.
    #[must_use]
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self::with_command(runner, DEFAULT_SUBST_PROGRAM, Vec::new())
    }

    /// Create a resolver that queries `program` with `args`.
    #[must_use]
    pub fn with_command(
        runner: Arc<dyn CommandRunner>,
        program: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            runner,
            program: program.into(),
            args,
            cache: Mutex::new(None),
        }
    }

    /// Create a resolver from the `subst` configuration section.
    #[must_use]
    pub fn from_config(runner: Arc<dyn CommandRunner>, config: &SubstConfig) -> Self {
        Self::with_command(
            runner,
            config
                .program
                .clone()
                .unwrap_or_else(|| DEFAULT_SUBST_PROGRAM.to_string()),
            config.args.clone().unwrap_or_default(),
        )
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<SubstTable>>> {
        // The cached value is replaced whole, so a poisoned lock still holds a valid table.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The substitution table, querying it if it is not cached yet.
    ///
    /// # Errors
    ///
    /// Returns `Error::SubstQuery` if the query command fails. Nothing is
    /// cached in that case.
    pub fn try_table(&self) -> Result<Arc<SubstTable>> {
        let mut cache = self.lock();
        if let Some(table) = cache.as_ref() {
            return Ok(Arc::clone(table));
        }

        let output = self.runner.run(&self.program, &self.args).map_err(|source| {
            log::error!("drive substitution query {} failed: {source}", self.program);
            Error::SubstQuery {
                program: self.program.clone(),
                source,
            }
        })?;

        let table = Arc::new(SubstTable::parse(&output));
        log::debug!("cached {} drive substitutions", table.len());
        *cache = Some(Arc::clone(&table));
        Ok(table)
    }

    /// The substitution table, or an empty table if the query fails.
    ///
    /// The empty table returned on failure is not cached.
    pub fn table(&self) -> Arc<SubstTable> {
        self.try_table().unwrap_or_default()
    }

    /// Whether a table is currently cached.
    pub fn is_cached(&self) -> bool {
        self.lock().is_some()
    }

    /// Drop the cached table so the next lookup queries again.
    pub fn reset(&self) {
        *self.lock() = None;
    }

    /// Install `table` as the cached table without querying.
    pub fn seed(&self, table: SubstTable) {
        *self.lock() = Some(Arc::new(table));
    }

    /// Translate a virtual-drive path to its real location.
    ///
    /// The first mapping whose drive prefixes `path` is applied. A bare drive
    /// such as `P:` maps to the target itself. Empty paths, an empty table and
    /// paths on no mapped drive come back unchanged.
    pub fn to_real(&self, path: &FsPath) -> FsPath {
        if path.is_empty() {
            return path.clone();
        }

        let table = self.table();
        for mapping in table.iter() {
            let drive = mapping.drive.as_str();
            if let Some(rest) = path.as_str().strip_prefix(drive) {
                return FsPath::new(format!("{}{SEPARATOR}{rest}", mapping.target));
            }
            if path.as_str() == drive.trim_end_matches(SEPARATOR) {
                return mapping.target.clone();
            }
        }
        path.clone()
    }

    /// Translate a real path to its virtual-drive form.
    ///
    /// The first mapping whose target contains `path` is applied, matching
    /// only at a component boundary. Anything else comes back unchanged.
    pub fn to_virtual(&self, path: &FsPath) -> FsPath {
        if path.is_empty() {
            return path.clone();
        }

        let table = self.table();
        for mapping in table.iter() {
            if let Some(rest) = strip_dir_prefix(path.as_str(), mapping.target.as_str()) {
                // The target itself, without a trailing separator, is the bare drive
                if rest.is_empty() && !path.is_dir_hint() {
                    return FsPath::new(mapping.drive.as_str().trim_end_matches(SEPARATOR));
                }
                return FsPath::new(format!("{}{rest}", mapping.drive));
            }
        }
        path.clone()
    }
}

impl std::fmt::Debug for SubstResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubstResolver")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("cached", &self.is_cached())
            .finish_non_exhaustive()
    }
}
