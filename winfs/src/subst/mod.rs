//! Drive substitution.
//!
//! A virtual drive created with `subst` makes one directory reachable under
//! two spellings: `P:\src` and `C:\long\path\src`. This module reads the
//! host's substitution table and translates paths in both directions so the
//! two spellings can be compared.
//!
//! Translation is prefix based and applies the first matching mapping in
//! table order. Nested mappings (one target inside another) therefore
//! translate according to the order the query reported them in.

mod resolver;
mod table;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::{SubstResolver, DEFAULT_SUBST_PROGRAM};
pub use table::{SubstMapping, SubstTable};
