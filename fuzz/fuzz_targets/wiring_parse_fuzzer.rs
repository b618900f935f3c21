//! Fuzz target for wiring and reflector parsing
//!
//! # Invariants
//!
//! - A wiring that parses is a bijection and its inverse undoes it
//! - A reflector that parses is an involution with no fixed points
//! - NEVER panic on malformed strings

#![no_main]

use enigma_core::{Letter, Reflector, Wiring};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(wiring) = Wiring::parse(data) {
        let inverse = wiring.inverse();
        for l in Letter::all() {
            assert_eq!(inverse.map(wiring.map(l)), l);
        }
        assert_eq!(Wiring::parse(&wiring.as_string()).ok(), Some(wiring));
    }

    if let Ok(reflector) = Reflector::parse(data) {
        for l in Letter::all() {
            assert_ne!(reflector.reflect(l), l);
            assert_eq!(reflector.reflect(reflector.reflect(l)), l);
        }
    }
});
