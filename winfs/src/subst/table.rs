//! Parsed drive-substitution tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::path::FsPath;

/// One virtual drive and the real directory it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstMapping {
    /// Drive designator, e.g. `P:\`, normalized as a directory path.
    pub drive: FsPath,
    /// Real directory behind the drive.
    pub target: FsPath,
}

impl SubstMapping {
    /// Create a mapping from drive and target text.
    #[must_use]
    pub fn new(drive: &str, target: &str) -> Self {
        Self {
            drive: FsPath::new_dir(drive),
            target: FsPath::new(target.trim_end_matches(['/', '\\'])),
        }
    }
}

/// Ordered drive-substitution mappings.
///
/// Mappings keep the order in which the query reported them; translation
/// applies the first mapping that matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstTable {
    mappings: Vec<SubstMapping>,
}

static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z]:\\): => (.+)$").expect("valid subst line regex"));

impl SubstTable {
    /// Parse the text printed by the drive-substitution query.
    ///
    /// Each line of the form `P:\: => C:\real\dir` contributes one mapping;
    /// any other line is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use winfs::{FsPath, SubstTable};
    ///
    /// let table = SubstTable::parse("P:\\: => C:\\a\\b\r\n");
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.iter().next().unwrap().target, FsPath::new("C:\\a\\b"));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mappings = LINE_RE
            .captures_iter(text)
            .map(|caps| SubstMapping::new(&caps[1], caps[2].trim()))
            .collect();
        Self { mappings }
    }

    /// Build a table from `(drive, target)` pairs, keeping their order.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            mappings: pairs
                .into_iter()
                .map(|(drive, target)| SubstMapping::new(drive, target))
                .collect(),
        }
    }

    /// Whether the table holds no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Iterate over mappings in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, SubstMapping> {
        self.mappings.iter()
    }
}

impl<'a> IntoIterator for &'a SubstTable {
    type Item = &'a SubstMapping;
    type IntoIter = std::slice::Iter<'a, SubstMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
