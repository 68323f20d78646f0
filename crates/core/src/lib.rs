//! Core types for appver
//!
//! This crate defines a small version number type and the pieces around it:
//! - Version: major with optional minor/patch, lenient parsing, canonical
//!   rendering, collapsed-to-zero ordering, string serde
//! - parse: the total tokenizer behind `Version::parse`
//! - VersionSource: injected lookup of the host's declared version
//! - HostManifest: a TOML/JSON record embedding a version field
//! - Error: error type for manifest handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod manifest;
pub mod parse;
pub mod source;
pub mod version;

pub use error::{Error, Result};
pub use manifest::HostManifest;
pub use source::{EnvVersion, PackageVersion, VersionSource};
pub use version::Version;
