//! Host manifest
//!
//! A small record describing the running application. It is the typical
//! document a [`Version`] gets embedded in, and it doubles as a
//! [`VersionSource`].
//!
//! ## TOML
//!
//! ```toml
//! name = "my-app"
//! version = "1.2.3"
//! ```
//!
//! Both fields are optional. A `version` that is present but not a string is
//! rejected with [`Error::Serialization`].

use crate::error::{Error, Result};
use crate::source::VersionSource;
use crate::Version;
use serde::{Deserialize, Serialize};

/// Application manifest carrying a version field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostManifest {
    /// Application name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Declared application version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

impl HostManifest {
    /// Create a manifest with the given name and version
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        HostManifest {
            name: Some(name.into()),
            version: Some(version),
        }
    }

    /// Parse a manifest from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, a field has the wrong
    /// type, or the name is empty.
    pub fn from_toml(text: &str) -> Result<Self> {
        let manifest: HostManifest = toml::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Render the manifest as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Parse a manifest from JSON text
    ///
    /// # Errors
    ///
    /// Same conditions as [`HostManifest::from_toml`].
    pub fn from_json(text: &str) -> Result<Self> {
        let manifest: HostManifest = serde_json::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Render the manifest as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns the default manifest file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Application manifest
#
# Name of the application (optional)
# name = "my-app"

# Declared version (optional). Parsed leniently: digits are kept,
# everything else is dropped, and at most major.minor.patch is used.
# version = "0.1.0"
"#
    }

    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::InvalidManifest(
                    "name must not be empty when present".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl VersionSource for HostManifest {
    fn version_string(&self) -> Option<String> {
        self.version.map(|version| version.to_string())
    }
}
