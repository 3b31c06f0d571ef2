//! Property-based tests for drive substitution translation.

use std::sync::Arc;

use super::{SubstResolver, SubstTable};
use crate::path::FsPath;
use crate::process::MockCommandRunner;
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,10}"
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| parts.join("\\"))
}

fn resolver(target: &str) -> SubstResolver {
    let mut runner = MockCommandRunner::new();
    runner.expect_run().times(0);
    let resolver = SubstResolver::new(Arc::new(runner));
    resolver.seed(SubstTable::from_pairs([("P:\\", target)]));
    resolver
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // A path on the virtual drive survives a round trip through its real form
    #[test]
    fn virtual_real_round_trip(target in relative_strategy(), rest in relative_strategy()) {
        let resolver = resolver(&format!("C:\\{target}"));
        let virtual_path = FsPath::new(format!("P:\\{rest}"));

        let real = resolver.to_real(&virtual_path);
        prop_assert_eq!(resolver.to_virtual(&real), virtual_path);
    }

    // A path below the real target survives the opposite round trip
    #[test]
    fn real_virtual_round_trip(target in relative_strategy(), rest in relative_strategy()) {
        let resolver = resolver(&format!("C:\\{target}"));
        let real = FsPath::new(format!("C:\\{target}\\{rest}"));

        let virtual_path = resolver.to_virtual(&real);
        prop_assert_eq!(resolver.to_real(&virtual_path), real);
    }

    // The real target and its virtual drive translate into each other
    #[test]
    fn exact_target_round_trip(target in relative_strategy(), as_dir in any::<bool>()) {
        let resolver = resolver(&format!("C:\\{target}"));
        let text = format!("C:\\{target}");
        let real = if as_dir { FsPath::new_dir(text) } else { FsPath::new(text) };

        let virtual_path = resolver.to_virtual(&real);
        prop_assert_eq!(resolver.to_real(&virtual_path), real.clone());
        prop_assert_eq!(resolver.to_virtual(&resolver.to_real(&virtual_path)), virtual_path);
    }

    // Paths on other drives are never rewritten
    #[test]
    fn other_drives_untouched(rest in relative_strategy()) {
        let resolver = resolver("C:\\a\\b");
        let path = FsPath::new(format!("D:\\{rest}"));
        prop_assert_eq!(resolver.to_real(&path), path.clone());
        prop_assert_eq!(resolver.to_virtual(&path), path);
    }
}
