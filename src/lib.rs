//! appver - version numbers for applications
//!
//! A single value type, [`Version`], holding a major number with an optional
//! minor and patch.
//!
//! # Quick Start
//!
//! ```
//! use appver::Version;
//!
//! let installed = Version::parse("1.2");
//! let required = Version::full(1, 2, 0);
//!
//! // Absent components compare as zero
//! assert!(installed >= required);
//!
//! // but are never rendered
//! assert_eq!(installed.to_string(), "1.2");
//! ```

// Re-export the public API from appver-core
pub use appver_core::*;
