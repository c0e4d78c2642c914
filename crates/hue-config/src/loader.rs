//! Settings file loading and saving (JSON or YAML)

use std::{fs, path::Path};

use tracing::{debug, info};

use crate::{
    error::{ConfigError, Result},
    types::Settings,
};

enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

impl Settings {
    /// Load settings from a JSON or YAML file
    ///
    /// A missing file yields the defaults; fields absent from the file keep
    /// their default values.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = format_of(path)?;
        if !path.exists() {
            debug!("Settings file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Yaml => serde_yaml::from_str(&content)?,
        };
        settings.validate()?;

        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON or YAML file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Yaml => serde_yaml::to_string(self)?,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
