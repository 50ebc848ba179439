use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tagging parameters suitable for config files and CLI overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Executable of the external tagging tool
    pub tool: String,
    /// Tag schema code passed to `-t` and `--type` (ComicRack is `cr`)
    pub format_code: String,
    /// Flag that introduces the encoded metadata payload
    pub metadata_flag: String,
    /// Archive file extension, without the dot
    pub extension: String,
    /// Print the tags back after a successful write
    pub print_after_write: bool,
    /// Invalid answers tolerated at one prompt before giving up
    pub prompt_attempts: u32,
    pub permissions: PermissionFix,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            tool: "comictagger".to_string(),
            format_code: "cr".to_string(),
            metadata_flag: "-m".to_string(),
            extension: "cbz".to_string(),
            print_after_write: true,
            prompt_attempts: 20,
            permissions: PermissionFix::default(),
        }
    }
}

impl TaggerConfig {
    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Ownership and mode normalization applied after a catalog directory is tagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionFix {
    pub enabled: bool,
    /// Octal mode for archive files, as given to `chmod`
    pub file_mode: String,
    /// `user:group` given to `chown -R`
    pub owner: String,
}

impl Default for PermissionFix {
    fn default() -> Self {
        Self {
            enabled: false,
            file_mode: "644".to_string(),
            owner: "1000:1000".to_string(),
        }
    }
}
