//! Icon identities for toggle controls.
//!
//! An [`Icon`] names an image without loading it: decoding and rasterizing is
//! the host toolkit's job. Two icons are equal when they refer to the same
//! image, which is what the toggle control needs to decide whether the icon
//! identity changes across states.
//!
//! # Example
//!
//! ```
//! use pulse_toggle_render::Icon;
//!
//! let heart = Icon::from_name("heart");
//! let outline = Icon::from_path("icons/heart_outline.svg");
//! assert_ne!(heart, outline);
//!
//! // References as written in configuration files
//! assert_eq!(Icon::from_reference("name:heart"), heart);
//! assert_eq!(Icon::from_reference("icons/heart_outline.svg"), outline);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Prefix that marks a named icon in a textual reference.
pub const NAMED_PREFIX: &str = "name:";

/// Where an icon's image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconSource {
    /// A named resource resolved by the host (theme icon, bundled asset id).
    Named(String),
    /// A file on disk.
    Path(PathBuf),
}

/// A cheap-to-clone icon identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon {
    source: Arc<IconSource>,
}

impl Icon {
    /// Create an icon that refers to a named resource.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            source: Arc::new(IconSource::Named(name.into())),
        }
    }

    /// Create an icon backed by a file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Arc::new(IconSource::Path(path.into())),
        }
    }

    /// Parse a textual icon reference.
    ///
    /// `name:<id>` selects a named resource; anything else is a file path.
    pub fn from_reference(reference: &str) -> Self {
        match reference.strip_prefix(NAMED_PREFIX) {
            Some(name) => Self::from_name(name),
            None => Self::from_path(reference),
        }
    }

    /// Get the icon source.
    pub fn source(&self) -> &IconSource {
        &self.source
    }

    /// The resource name, if this is a named icon.
    pub fn name(&self) -> Option<&str> {
        match self.source.as_ref() {
            IconSource::Named(name) => Some(name),
            IconSource::Path(_) => None,
        }
    }

    /// The file path, if this icon is backed by a file.
    pub fn path(&self) -> Option<&Path> {
        match self.source.as_ref() {
            IconSource::Path(path) => Some(path),
            IconSource::Named(_) => None,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source.as_ref() {
            IconSource::Named(name) => write!(f, "{NAMED_PREFIX}{name}"),
            IconSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<IconSource> for Icon {
    fn from(source: IconSource) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}
