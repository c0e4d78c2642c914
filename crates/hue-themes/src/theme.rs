//! Theme entity and its load pipeline

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use hue_files::FileReader;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::{
    compiler::StyleCompiler,
    error::{Result, ThemeError},
    extract::extract_scrollbars,
    injector::{StyleHandle, StyleInjector},
};

/// Where a theme file lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    pub file_name: String,
    pub path: PathBuf,
}

impl ThemeOptions {
    pub fn new(file_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Default)]
struct LoadedState {
    css: Option<StyleHandle>,
    scrollbar: Option<Vec<String>>,
}

/// A theme backed by a single stylesheet file
///
/// Names are derived from the file name once, at construction. The compiled
/// stylesheet is cached: `load(false)` on a loaded theme does nothing, while
/// `load(true)` swaps the embedded stylesheet for a freshly compiled one.
pub struct Theme {
    path: PathBuf,
    file_name: String,
    display_name: String,
    name: String,
    class_name: String,
    file: OnceCell<PathBuf>,
    state: RwLock<LoadedState>,
    /// Serializes loads on this instance
    load_lock: tokio::sync::Mutex<()>,
    /// Completed loads, used to let waiting callers join the one in flight
    completed_loads: AtomicU64,
    reader: Arc<dyn FileReader>,
    injector: Arc<dyn StyleInjector>,
    compiler: StyleCompiler,
}

impl std::fmt::Debug for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Theme")
            .field("path", &self.path)
            .field("file_name", &self.file_name)
            .field("class_name", &self.class_name)
            .field("state", &*self.state.read())
            .finish()
    }
}

impl Theme {
    /// Create a theme for `options`, reading through `reader` and embedding through `injector`
    pub fn new(
        options: ThemeOptions,
        reader: Arc<dyn FileReader>,
        injector: Arc<dyn StyleInjector>,
    ) -> Self {
        let ThemeOptions { file_name, path } = options;
        let name = strip_extension(&file_name).to_string();

        Self {
            path,
            display_name: to_display_name(&file_name),
            class_name: format!("theme-{}", name),
            name,
            file_name,
            file: OnceCell::new(),
            state: RwLock::new(LoadedState::default()),
            load_lock: tokio::sync::Mutex::new(()),
            completed_loads: AtomicU64::new(0),
            reader,
            injector,
            compiler: StyleCompiler::new(),
        }
    }

    /// Use a specific compiler (e.g. compressed output)
    pub fn with_compiler(mut self, compiler: StyleCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    /// Directory containing the theme file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including its extension
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Human readable name, e.g. "Solarized Dark" for `solarized-dark.css`
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// File name without its extension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// CSS class the compiled rules are scoped under
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Full path of the theme file, resolved on first use
    pub fn file(&self) -> &Path {
        self.file.get_or_init(|| self.path.join(&self.file_name))
    }

    /// Handle of the embedded stylesheet, once loaded
    pub fn css(&self) -> Option<StyleHandle> {
        self.state.read().css
    }

    /// Scrollbar rules extracted by the last load that got that far
    pub fn scrollbar(&self) -> Option<Vec<String>> {
        self.state.read().scrollbar.clone()
    }

    /// Whether a compiled stylesheet is currently embedded
    pub fn is_loaded(&self) -> bool {
        self.state.read().css.is_some()
    }

    /// Read, extract, compile and inject the theme
    ///
    /// Without `force` an already loaded theme is returned untouched. With
    /// `force` the existing stylesheet is removed before the file is read
    /// again. Callers that arrive while another load is running wait for it
    /// and share its result.
    pub async fn load(&self, force: bool) -> Result<&Self> {
        let seen = self.completed_loads.load(Ordering::Acquire);
        let _guard = self.load_lock.lock().await;

        if self.completed_loads.load(Ordering::Acquire) != seen && self.is_loaded() {
            debug!(theme = %self.name, "Joined in-flight load");
            return Ok(self);
        }

        if self.is_loaded() && !force {
            return Ok(self);
        }

        let previous = self.state.write().css.take();
        if let Some(handle) = previous {
            self.injector.remove_stylesheet(handle);
            debug!(theme = %self.name, "Removed previous stylesheet");
        }

        let content = self
            .reader
            .read_to_string(self.file())
            .await
            .map_err(|source| {
                warn!(theme = %self.name, "Theme read failed: {}", source);
                ThemeError::Read {
                    theme: self.name.clone(),
                    source,
                }
            })?;

        let extracted = extract_scrollbars(&content);
        debug!(
            theme = %self.name,
            "Extracted {} scrollbar rules",
            extracted.scrollbar.len()
        );
        self.state.write().scrollbar = Some(extracted.scrollbar);

        let css = self.compiler.compile(&extracted.content, &self.class_name)?;

        let handle = self.injector.add_stylesheet(&css);
        self.state.write().css = Some(handle);
        self.completed_loads.fetch_add(1, Ordering::AcqRel);

        debug!(theme = %self.name, "Theme loaded");
        Ok(self)
    }

    /// Remove the embedded stylesheet; returns whether one was present
    pub async fn unload(&self) -> bool {
        let _guard = self.load_lock.lock().await;
        let previous = self.state.write().css.take();
        match previous {
            Some(handle) => {
                self.injector.remove_stylesheet(handle);
                debug!(theme = %self.name, "Theme unloaded");
                true
            }
            None => false,
        }
    }
}

fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// Dashes become spaces and every word is capitalized
fn to_display_name(file_name: &str) -> String {
    strip_extension(file_name)
        .replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
