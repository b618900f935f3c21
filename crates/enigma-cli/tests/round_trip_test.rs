//! Round-trip tests through the command-line front end.

use enigma_cli::{RunConfig, run};
use proptest::prelude::*;

fn window_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

proptest! {
    /// PROPERTY: typing the output back in at the same window restores the
    /// input, with letters upper-cased and everything else untouched.
    #[test]
    fn prop_round_trip_keeps_layout(window in window_strategy(), text in "[A-Za-z .,!?0-9]{0,120}") {
        let config = RunConfig { window, group: None };

        let ciphertext = run(&config, &text).unwrap();
        prop_assert_eq!(ciphertext.chars().count(), text.chars().count());

        let plaintext = run(&config, &ciphertext).unwrap();
        prop_assert_eq!(plaintext, text.to_ascii_uppercase());
    }

    /// PROPERTY: grouped output has only full groups except the last.
    #[test]
    fn prop_grouping_shape(text in "[A-Z]{1,100}", size in 1..10usize) {
        let config = RunConfig { group: Some(size), ..RunConfig::default() };
        let out = run(&config, &text).unwrap();

        let groups: Vec<&str> = out.split(' ').collect();
        let (last, full) = groups.split_last().unwrap();
        prop_assert!(full.iter().all(|g| g.len() == size));
        prop_assert!(!last.is_empty() && last.len() <= size);
        prop_assert_eq!(groups.concat().len(), text.len());
    }
}
