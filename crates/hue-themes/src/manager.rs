//! Theme management: applying the selected themes and the scrollbar block

use std::sync::Arc;

use hue_config::{Settings, ThemeSelection};
use hue_files::FileReader;
use parking_lot::{Mutex, RwLock};
use tracing::{info, warn};

use crate::{
    error::{Result, ThemeError},
    injector::{StyleHandle, StyleInjector},
    registry::ThemeRegistry,
    theme::Theme,
};

/// Applies the themes named in the settings to the document
///
/// Switching the selection loads the new themes and unloads the ones that
/// are no longer selected. Scrollbar rules of the active themes are embedded
/// as one separate stylesheet while custom scrollbars are enabled.
pub struct ThemeManager {
    settings: RwLock<Settings>,
    registry: ThemeRegistry,
    injector: Arc<dyn StyleInjector>,
    active: RwLock<Vec<String>>,
    scrollbar_sheet: Mutex<Option<StyleHandle>>,
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("active", &*self.active.read())
            .field("themes", &self.registry.names())
            .finish()
    }
}

impl ThemeManager {
    /// Create a manager over an already scanned registry
    pub fn new(
        settings: Settings,
        registry: ThemeRegistry,
        injector: Arc<dyn StyleInjector>,
    ) -> Self {
        Self {
            settings: RwLock::new(settings),
            registry,
            injector,
            active: RwLock::new(Vec::new()),
            scrollbar_sheet: Mutex::new(None),
        }
    }

    /// Scan the settings' search paths and build a manager over the result
    pub async fn from_settings(
        settings: Settings,
        reader: Arc<dyn FileReader>,
        injector: Arc<dyn StyleInjector>,
    ) -> Self {
        let registry = ThemeRegistry::scan(&settings.paths, reader, injector.clone()).await;
        Self::new(settings, registry, injector)
    }

    /// Snapshot of the current settings
    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    /// Get the theme registry
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Names of the currently applied themes
    pub fn active(&self) -> Vec<String> {
        self.active.read().clone()
    }

    /// Handle of the embedded scrollbar stylesheet, if any
    pub fn scrollbar_stylesheet(&self) -> Option<StyleHandle> {
        *self.scrollbar_sheet.lock()
    }

    /// Load the selected themes and make them the active set
    ///
    /// Returns the class names to put on the editor root, in selection order.
    /// On failure the previous active set stays in place.
    pub async fn apply(&self) -> Result<Vec<String>> {
        let selected = self.settings.read().theme.names();
        let previous = self.active();

        let themes = selected
            .iter()
            .map(|name| {
                self.registry
                    .get(name)
                    .ok_or_else(|| ThemeError::NotFound(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        for (idx, theme) in themes.iter().enumerate() {
            if let Err(e) = theme.load(false).await {
                warn!("Failed to apply theme {}: {}", theme.name(), e);
                for loaded in &themes[..idx] {
                    if !previous.iter().any(|name| name == loaded.name()) {
                        loaded.unload().await;
                    }
                }
                return Err(e);
            }
        }

        for name in previous.iter().filter(|name| !selected.contains(name)) {
            if let Some(theme) = self.registry.get(name) {
                theme.unload().await;
            }
        }

        *self.active.write() = selected.clone();
        self.refresh_scrollbars();

        info!("Applied themes: {}", selected.join(", "));
        Ok(themes.iter().map(|t| t.class_name().to_string()).collect())
    }

    /// Replace the theme selection and apply it
    pub async fn set_theme(&self, selection: impl Into<ThemeSelection>) -> Result<Vec<String>> {
        let selection = selection.into();
        let previous = std::mem::replace(&mut self.settings.write().theme, selection);

        match self.apply().await {
            Ok(classes) => Ok(classes),
            Err(e) => {
                self.settings.write().theme = previous;
                Err(e)
            }
        }
    }

    /// Reload the active themes; `force` recompiles from disk
    ///
    /// Every active theme is reloaded even when an earlier one fails; the
    /// first error is returned. A theme whose reload failed stays selected
    /// but has no stylesheet until a later load succeeds.
    pub async fn reload(&self, force: bool) -> Result<()> {
        let mut first_error = None;
        for theme in self.active_themes() {
            if let Err(e) = theme.load(force).await {
                warn!("Failed to reload theme {}: {}", theme.name(), e);
                first_error.get_or_insert(e);
            }
        }

        self.refresh_scrollbars();
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Turn the theme scrollbar rules on or off
    pub fn set_custom_scrollbars(&self, enabled: bool) {
        self.settings.write().custom_scrollbars = enabled;
        self.refresh_scrollbars();
    }

    fn active_themes(&self) -> Vec<Arc<Theme>> {
        self.active
            .read()
            .iter()
            .filter_map(|name| self.registry.get(name))
            .collect()
    }

    /// Re-embed the scrollbar stylesheet from the loaded active themes
    fn refresh_scrollbars(&self) {
        let mut sheet = self.scrollbar_sheet.lock();
        if let Some(handle) = sheet.take() {
            self.injector.remove_stylesheet(handle);
        }

        if !self.settings.read().custom_scrollbars {
            return;
        }

        let rules: Vec<String> = self
            .active_themes()
            .iter()
            .filter(|theme| theme.is_loaded())
            .filter_map(|theme| theme.scrollbar())
            .flatten()
            .collect();
        if !rules.is_empty() {
            *sheet = Some(self.injector.add_stylesheet(&rules.join("\n")));
        }
    }
}
