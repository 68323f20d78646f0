//! Version number type
//!
//! A [`Version`] is a major number with an optional minor and an optional
//! patch, e.g. `1`, `1.2` or `1.2.3`.
//!
//! ## Presence vs. value
//!
//! An absent minor or patch is not the same thing as zero when rendering:
//! `Version::major_only(1)` renders as `"1"` while `Version::full(1, 0, 0)`
//! renders as `"1.0.0"`.
//!
//! ## Comparison
//!
//! Equality, ordering and hashing treat an absent component as zero, so the
//! two versions above compare equal. Everything is derived from a single
//! three-way comparison over `(major, minor_or_zero, patch_or_zero)`.
//!
//! ## Serialization
//!
//! Versions serialize as their canonical string and deserialize through
//! [`Version::parse`], so they embed as a plain string field in any serde
//! format.

use crate::parse;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::trace;

/// A version number made of a major, optional minor and optional patch
///
/// ## Invariants
///
/// - Immutable once constructed
/// - `major` is always present
/// - Absent components compare (and hash) as zero
#[derive(Debug, Clone, Copy)]
pub struct Version {
    major: i64,
    minor: Option<i64>,
    patch: Option<i64>,
}

impl Version {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a version from its components
    ///
    /// No validation is performed: negative values are kept as given, and a
    /// patch without a minor is stored but never rendered.
    pub const fn new(major: i64, minor: Option<i64>, patch: Option<i64>) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Create a version with only a major number
    pub const fn major_only(major: i64) -> Self {
        Version::new(major, None, None)
    }

    /// Create a version with a major and minor number
    pub const fn major_minor(major: i64, minor: i64) -> Self {
        Version::new(major, Some(minor), None)
    }

    /// Create a version with all three components
    pub const fn full(major: i64, minor: i64, patch: i64) -> Self {
        Version::new(major, Some(minor), Some(patch))
    }

    /// Parse a version from arbitrary text
    ///
    /// Never fails. See [`parse::components`] for the grammar; the first
    /// three components become major, minor and patch, anything past the
    /// third is discarded, and input without any digits yields `0`.
    ///
    /// Note that `"1.2v32"` parses as `1.232`: letters inside a component are
    /// deleted and the digits around them fuse.
    ///
    /// ```
    /// use appver_core::Version;
    ///
    /// let version = Version::parse("1.2.3");
    /// assert_eq!(version.major(), 1);
    /// assert_eq!(version.minor(), Some(2));
    /// assert_eq!(version.patch(), Some(3));
    /// ```
    pub fn parse(input: &str) -> Self {
        let components = parse::components(input);
        if components.len() > 3 {
            trace!(
                input,
                discarded = components.len() - 3,
                "Discarding version components past patch"
            );
        }

        match components.as_slice() {
            [] => Version::default(),
            [major] => Version::major_only(*major),
            [major, minor] => Version::major_minor(*major, *minor),
            [major, minor, patch, ..] => Version::full(*major, *minor, *patch),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the major number
    #[inline]
    pub const fn major(&self) -> i64 {
        self.major
    }

    /// Get the minor number, if one was specified
    #[inline]
    pub const fn minor(&self) -> Option<i64> {
        self.minor
    }

    /// Get the patch number, if one was specified
    #[inline]
    pub const fn patch(&self) -> Option<i64> {
        self.patch
    }

    /// Get the minor number, treating an absent minor as zero
    #[inline]
    pub const fn minor_or_zero(&self) -> i64 {
        match self.minor {
            Some(minor) => minor,
            None => 0,
        }
    }

    /// Get the patch number, treating an absent patch as zero
    #[inline]
    pub const fn patch_or_zero(&self) -> i64 {
        match self.patch {
            Some(patch) => patch,
            None => 0,
        }
    }

    /// The tuple that equality, ordering and hashing are defined over
    #[inline]
    fn collapsed(&self) -> (i64, i64, i64) {
        (self.major, self.minor_or_zero(), self.patch_or_zero())
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.collapsed().cmp(&other.collapsed())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.collapsed().hash(state);
    }
}

// ============================================================================
// Rendering
// ============================================================================

impl fmt::Display for Version {
    /// Canonical rendering: unspecified trailing components are omitted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.minor, self.patch) {
            (Some(minor), Some(patch)) => write!(f, "{}.{}.{}", self.major, minor, patch),
            (Some(minor), None) => write!(f, "{}.{}", self.major, minor),
            (None, _) => write!(f, "{}", self.major),
        }
    }
}

impl Default for Version {
    /// Default is `0` with no minor or patch, the value unparsable text yields
    fn default() -> Self {
        Version::major_only(0)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Version::parse(s))
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Version::parse(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Version::parse(&s)
    }
}

impl From<(i64, i64, i64)> for Version {
    fn from((major, minor, patch): (i64, i64, i64)) -> Self {
        Version::full(major, minor, patch)
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Version::parse(&s))
    }
}

// ============================================================================
// Tests
// ============================================================================
