//! Shared test helpers for `cmdargs_core` integration tests.

#![allow(unreachable_pub)]

use cmdargs_core::{Arguments, Codeblock};

/// Token texts in order.
#[allow(dead_code)]
pub fn token_raws(args: &Arguments) -> Vec<&str> {
    args.iter().map(|a| a.raw()).collect()
}

/// Extract a codeblock and panic with the input when none is found.
#[allow(dead_code)]
pub fn expect_codeblock(raw: &str) -> Codeblock {
    cmdargs_core::parse_arguments(raw)
        .as_codeblock()
        .unwrap_or_else(|| panic!("expected a codeblock in {raw:?}"))
}
