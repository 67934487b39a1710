//! Route settings.
//!
//! Read-only configuration consumed by the route list: which feature
//! attributes carry the room label and floor, and whether location services
//! are enabled. Settings are loaded once (from TOML or JSON) and shared as
//! `Arc<RouteSettings>`; this module never writes them back.
//!
//! ```toml
//! locator_fields = ["LONGNAME", "KNOWNAS"]
//! rooms_layer_floor_column_name = "FLOOR"
//! is_location_services_enabled = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use waypoint_core::logging::targets;

/// Result type alias for settings operations.
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Errors that can occur while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// File I/O error.
    #[error("Failed to read settings '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[error("Invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported settings format for '{0}'")]
    UnsupportedFormat(PathBuf),
}

/// Attribute keys and capability flags for route lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteSettings {
    /// Attribute keys used by the locator. The first one is the room label.
    pub locator_fields: Vec<String>,
    /// Attribute key holding a room's floor.
    pub rooms_layer_floor_column_name: String,
    /// Whether the device may use its own location as a route stop.
    pub is_location_services_enabled: bool,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            locator_fields: vec!["LONGNAME".to_string(), "KNOWNAS".to_string()],
            rooms_layer_floor_column_name: "FLOOR".to_string(),
            is_location_services_enabled: false,
        }
    }
}

impl RouteSettings {
    /// Attribute key of the primary label, if any locator field is configured.
    pub fn primary_label_field(&self) -> Option<&str> {
        self.locator_fields.first().map(String::as_str)
    }

    /// Attribute key of the floor.
    pub fn floor_field(&self) -> &str {
        &self.rooms_layer_floor_column_name
    }

    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> SettingsResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse settings from JSON text. Missing keys take their defaults.
    pub fn from_json_str(text: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load settings from a TOML file.
    pub fn load_toml(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let settings = Self::from_toml_str(&read(path)?)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "loaded TOML settings");
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let settings = Self::from_json_str(&read(path)?)?;
        tracing::debug!(target: targets::SETTINGS, path = %path.display(), "loaded JSON settings");
        Ok(settings)
    }

    /// Load settings, choosing the format from the file extension.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::load_toml(path),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::load_json(path),
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

fn read(path: &Path) -> SettingsResult<String> {
    std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
