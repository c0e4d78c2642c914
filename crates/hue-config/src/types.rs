//! Core settings types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    defaults,
    error::{ConfigError, Result},
};

/// Theme and font settings consumed by the editor UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Editor font size in pixels
    pub font_size: u32,
    /// CSS line height
    pub line_height: String,
    /// CSS font family list
    #[serde(alias = "fontType")]
    pub font_family: String,
    /// Whether theme scrollbar rules are applied
    pub custom_scrollbars: bool,
    /// Active theme name(s)
    pub theme: ThemeSelection,
    /// Ordered theme search paths; earlier entries win on name clashes
    pub paths: Vec<SearchPath>,
}

/// A single theme name or an ordered list of names
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ThemeSelection {
    Single(String),
    Many(Vec<String>),
}

/// A directory searched for theme files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPath {
    pub path: PathBuf,
}

impl SearchPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThemeSelection {
    /// Theme names in selection order
    pub fn names(&self) -> Vec<String> {
        match self {
            Self::Single(name) => vec![name.clone()],
            Self::Many(names) => names.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(name) => name.is_empty(),
            Self::Many(names) => names.iter().all(|name| name.is_empty()),
        }
    }
}

impl Default for ThemeSelection {
    fn default() -> Self {
        Self::Many(vec![defaults::THEME.to_string()])
    }
}

impl From<&str> for ThemeSelection {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

impl From<Vec<String>> for ThemeSelection {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl Settings {
    /// Default search paths: user themes first, then bundled themes
    pub fn default_search_paths() -> Vec<SearchPath> {
        let mut paths = Vec::new();
        if let Some(user_dir) = defaults::user_themes_directory() {
            paths.push(SearchPath::new(user_dir));
        }
        paths.push(SearchPath::new(defaults::BUNDLED_THEMES_DIR));
        paths
    }

    /// Validate the settings data
    pub fn validate(&self) -> Result<()> {
        if self.font_size == 0 {
            return Err(ConfigError::Invalid(
                "font size must be greater than zero".to_string(),
            ));
        }
        if self.line_height.trim().is_empty() {
            return Err(ConfigError::Invalid("line height cannot be empty".to_string()));
        }
        if self.theme.is_empty() {
            return Err(ConfigError::Invalid("no theme selected".to_string()));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: defaults::FONT_SIZE,
            line_height: defaults::LINE_HEIGHT.to_string(),
            font_family: defaults::FONT_FAMILY.to_string(),
            custom_scrollbars: defaults::CUSTOM_SCROLLBARS,
            theme: ThemeSelection::default(),
            paths: Self::default_search_paths(),
        }
    }
}
