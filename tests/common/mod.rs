//! Shared test utilities for the integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

pub use appver::{EnvVersion, Error, HostManifest, PackageVersion, Version, VersionSource};
pub use proptest::prelude::*;

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (shown with `--nocapture`).
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Strategies
// ============================================================================

/// Non-negative component values, kept small enough to collide often
pub fn component() -> impl Strategy<Value = i64> {
    prop_oneof![0i64..4, 0i64..=i64::MAX]
}

/// Any version shape: major only, major.minor, or major.minor.patch
pub fn any_version() -> impl Strategy<Value = Version> {
    (
        component(),
        proptest::option::of(component()),
        component(),
        any::<bool>(),
    )
        .prop_map(|(major, minor, patch, with_patch)| match minor {
            Some(minor) if with_patch => Version::full(major, minor, patch),
            Some(minor) => Version::major_minor(major, minor),
            None => Version::major_only(major),
        })
}

/// Collapsed tuple used to cross-check comparisons
pub fn collapsed(v: &Version) -> (i64, i64, i64) {
    (v.major(), v.minor_or_zero(), v.patch_or_zero())
}
