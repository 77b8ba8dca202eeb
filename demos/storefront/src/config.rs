//! Storefront configuration file
//!
//! Every field is optional; missing fields take the storefront defaults.
//!
//! ```json
//! {
//!   "taglines": ["Hungry?", "We deliver"],
//!   "tagline_interval_ms": 3000,
//!   "carousel_autoplay": false,
//!   "menu_align": "end"
//! }
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use platter::{Align, DEFAULT_AUTOPLAY, DEFAULT_ROTATION, DEFAULT_TAGLINES};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub taglines: Vec<String>,
    pub tagline_interval_ms: u64,
    pub carousel_autoplay: bool,
    pub carousel_interval_ms: u64,
    /// Placement of the header menus under their triggers
    pub menu_align: Align,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            taglines: DEFAULT_TAGLINES.iter().map(|s| s.to_string()).collect(),
            tagline_interval_ms: DEFAULT_ROTATION.as_millis() as u64,
            carousel_autoplay: true,
            carousel_interval_ms: DEFAULT_AUTOPLAY.as_millis() as u64,
            menu_align: Align::End,
        }
    }
}

impl Config {
    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn tagline_interval(&self) -> Duration {
        Duration::from_millis(self.tagline_interval_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}
