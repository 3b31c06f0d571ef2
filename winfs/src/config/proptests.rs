//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, ExtractorConfig, ListOrder, ListingConfig, SubstConfig};
use proptest::prelude::*;

fn args_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z{}/-]{1,8}", 0..4)
}

fn order_strategy() -> impl Strategy<Value = ListOrder> {
    prop_oneof![Just(ListOrder::Name), Just(ListOrder::Date)]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::option::of("[a-z]{1,12}")),
        prop::option::of(prop::option::of(args_strategy())),
        prop::option::of(prop::option::of("[a-z/]{1,12}")),
        prop::option::of(prop::option::of(order_strategy())),
        prop::option::of(prop::option::of("[a-z.$^]{0,8}")),
    )
        .prop_map(|(program, args, external, order, pattern)| Config {
            subst: program.map(|program| SubstConfig {
                program,
                args: args.flatten(),
            }),
            extractor: external.map(|external| ExtractorConfig {
                external,
                args: None,
            }),
            listing: order.map(|order| ListingConfig {
                order,
                pattern: pattern.flatten(),
            }),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Merging into the empty config reproduces the source
    #[test]
    fn merge_into_default_is_identity(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Merging the empty config changes nothing
    #[test]
    fn merge_default_changes_nothing(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Every field set in the higher source is what the merge reports
    #[test]
    fn higher_source_fields_win(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        if let Some(program) = high.subst.as_ref().and_then(|s| s.program.as_ref()) {
            prop_assert_eq!(merged.subst_program(), program.as_str());
        } else {
            prop_assert_eq!(merged.subst_program(), low.subst_program());
        }

        if let Some(order) = high.listing.as_ref().and_then(|l| l.order) {
            prop_assert_eq!(merged.list_order(), order);
        } else {
            prop_assert_eq!(merged.list_order(), low.list_order());
        }
    }

    // Merging is idempotent
    #[test]
    fn merge_twice_is_merge_once(low in config_strategy(), high in config_strategy()) {
        let mut once = low.clone();
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }
}
