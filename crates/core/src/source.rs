//! Host version metadata
//!
//! Applications usually want to know "what version am I". Where that answer
//! lives depends on the host: a value baked in at build time, an environment
//! variable set by the launcher, or a manifest shipped next to the binary.
//!
//! Rather than reaching for a global, callers hand a [`VersionSource`] to
//! [`Version::current`]. Anything that can produce an optional version string
//! qualifies, including a plain closure, which keeps the lookup testable
//! without a real host.
//!
//! ```
//! use appver_core::{PackageVersion, Version};
//!
//! let current = Version::current(&PackageVersion::new("2.4.1"));
//! assert_eq!(current, Some(Version::full(2, 4, 1)));
//! ```

use crate::Version;
use tracing::debug;

/// Capability that yields the host's declared version string, if any
pub trait VersionSource {
    /// The raw version string, or `None` when the host declares none
    fn version_string(&self) -> Option<String>;
}

impl<F> VersionSource for F
where
    F: Fn() -> Option<String>,
{
    fn version_string(&self) -> Option<String> {
        self()
    }
}

impl Version {
    /// Ask `source` for the current version and parse it
    ///
    /// Returns `None` only when the source has no version string. A string
    /// that is present but unparsable still yields `Some(Version::default())`.
    pub fn current<S>(source: &S) -> Option<Version>
    where
        S: VersionSource + ?Sized,
    {
        match source.version_string() {
            Some(raw) => {
                let version = Version::parse(&raw);
                debug!(raw = %raw, version = %version, "Resolved current version");
                Some(version)
            }
            None => {
                debug!("Host declares no version");
                None
            }
        }
    }
}

// ============================================================================
// Providers
// ============================================================================

/// A version string fixed at build time
///
/// Usually built with [`package_version!`](crate::package_version), which
/// captures the calling crate's `CARGO_PKG_VERSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageVersion(&'static str);

impl PackageVersion {
    /// Wrap a static version string
    pub const fn new(version: &'static str) -> Self {
        PackageVersion(version)
    }

    /// The wrapped string
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl VersionSource for PackageVersion {
    fn version_string(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Build a [`PackageVersion`] from the calling crate's package metadata
#[macro_export]
macro_rules! package_version {
    () => {
        $crate::PackageVersion::new(env!("CARGO_PKG_VERSION"))
    };
}

/// A version string read from an environment variable
///
/// An unset variable, or one that is not valid unicode, yields no version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVersion {
    var: String,
}

impl EnvVersion {
    /// Read the version from `var`
    pub fn new(var: impl Into<String>) -> Self {
        EnvVersion { var: var.into() }
    }

    /// Name of the variable consulted
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Resolve the variable through `lookup` instead of the process environment
    pub fn lookup_with<L>(&self, lookup: L) -> Option<String>
    where
        L: FnOnce(&str) -> Option<String>,
    {
        lookup(&self.var)
    }
}

impl VersionSource for EnvVersion {
    fn version_string(&self) -> Option<String> {
        self.lookup_with(|var| std::env::var(var).ok())
    }
}
