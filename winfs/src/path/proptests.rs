//! Property-based tests for `FsPath`.
//!
//! Note: The normalize module already has property tests for the text
//! normalization itself. This module focuses on the value type.

use super::normalize::{normalize, SEPARATOR};
use super::FsPath;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}"
}

fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("/"), Just("\\"), Just("//"), Just("\\/")]
}

// Paths with arbitrary separator spellings between components
fn path_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((component_strategy(), separator_strategy()), 1..8).prop_map(|parts| {
        let mut text = String::from("C:");
        for (component, separator) in parts {
            text.push_str(separator);
            text.push_str(&component);
        }
        text
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Joining the empty segment never changes the path
    #[test]
    fn add_empty_is_identity(text in path_text_strategy()) {
        let path = FsPath::new(text);
        prop_assert_eq!(path.add("").to_string(), path.to_string());
    }

    // Rebuilding from the normalized text gives an equal path
    #[test]
    fn normalized_text_round_trips(text in path_text_strategy()) {
        let path = FsPath::new(text);
        prop_assert_eq!(FsPath::new(path.as_str()), path);
    }

    // Paths built as directories always end with the separator
    #[test]
    fn new_dir_has_trailing_separator(text in path_text_strategy()) {
        let dir = FsPath::new_dir(text);
        prop_assert!(dir.as_str().ends_with(SEPARATOR));
    }

    // Display matches the normalize function exactly
    #[test]
    fn display_is_normalized(text in path_text_strategy()) {
        let expected = normalize(&text);
        prop_assert_eq!(FsPath::new(text).to_string(), expected);
    }

    // Splitting then joining through parent/file_name is lossless
    #[test]
    fn parent_and_file_name_rejoin(text in path_text_strategy()) {
        let path = FsPath::new(text);
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            prop_assert_eq!(parent.add(name), path.clone());
        }
    }
}
