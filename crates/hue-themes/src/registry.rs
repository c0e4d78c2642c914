//! Theme registry for the themes discovered on the search paths
//!
//! Search paths are scanned in order; when two directories provide a theme
//! with the same name the earlier directory wins.

use std::{collections::HashMap, path::Path, sync::Arc};

use hue_config::SearchPath;
use hue_files::FileReader;
use tracing::{debug, info, warn};

use crate::{
    injector::StyleInjector,
    theme::{Theme, ThemeOptions},
};

/// File extensions recognized as theme stylesheets
pub const THEME_EXTENSIONS: &[&str] = &["css", "less", "scss"];

/// Registry of discovered themes, in discovery order
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: Vec<Arc<Theme>>,
    by_name: HashMap<String, Arc<Theme>>,
}

impl ThemeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one theme per stylesheet file found on `paths`
    pub async fn scan(
        paths: &[SearchPath],
        reader: Arc<dyn FileReader>,
        injector: Arc<dyn StyleInjector>,
    ) -> Self {
        let mut registry = Self::new();

        for search_path in paths {
            let dir = &search_path.path;
            let file_names = match theme_files_in(dir).await {
                Ok(file_names) => file_names,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("Theme directory {} does not exist", dir.display());
                    continue;
                }
                Err(e) => {
                    warn!("Failed to scan theme directory {}: {}", dir.display(), e);
                    continue;
                }
            };

            let mut added = 0;
            for file_name in file_names {
                let theme = Theme::new(
                    ThemeOptions::new(file_name, dir.clone()),
                    reader.clone(),
                    injector.clone(),
                );
                if registry.register(theme) {
                    added += 1;
                }
            }
            info!("Discovered {} themes in {}", added, dir.display());
        }

        registry
    }

    /// Add a theme unless one with the same name is already registered
    pub fn register(&mut self, theme: Theme) -> bool {
        if self.by_name.contains_key(theme.name()) {
            debug!(
                "Skipping {}: theme {} already registered",
                theme.file().display(),
                theme.name()
            );
            return false;
        }

        let theme = Arc::new(theme);
        self.by_name.insert(theme.name().to_string(), theme.clone());
        self.themes.push(theme);
        true
    }

    /// Get a theme by name
    pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
        self.by_name.get(name).cloned()
    }

    /// Check if a theme with this name is registered
    pub fn exists(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Theme names in discovery order
    pub fn names(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.name().to_string()).collect()
    }

    /// All themes in discovery order
    pub fn themes(&self) -> &[Arc<Theme>] {
        &self.themes
    }

    /// Number of registered themes
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// Sorted names of the theme files directly inside `dir`
async fn theme_files_in(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut file_names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let path = entry.path();
        let is_theme = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| THEME_EXTENSIONS.contains(&ext));
        if is_theme {
            file_names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    file_names.sort();
    Ok(file_names)
}
