//! Presence-based operating mode detection.
//!
//! The host application switches into Firebase mode when a provider config
//! file is present; absence implies the default offline mode.

use std::fmt;
use std::path::{Path, PathBuf};

/// File names probed during discovery, in priority order.
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    "firebase-config.yaml",
    "firebase-config.yml",
    "firebase-config.json",
];

/// Operating mode implied by the presence of a provider config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A provider config file is present; the backend client can be initialized.
    Firebase,
    /// No provider config file; the application runs against local state only.
    Offline,
}

impl Mode {
    /// Detect the mode for a directory.
    ///
    /// Presence only: a file that is present but invalid still selects
    /// Firebase mode, and the load step reports the error separately.
    pub fn detect(dir: impl AsRef<Path>) -> Self {
        if discover(dir).is_some() {
            Mode::Firebase
        } else {
            Mode::Offline
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Firebase => write!(f, "firebase"),
            Mode::Offline => write!(f, "offline"),
        }
    }
}

/// Find the provider config file in a directory, probing the well-known
/// names in priority order. Only regular files count as a hit.
pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let dir = dir.as_ref();
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
