//! Stylesheet injection into the hosting document

use parking_lot::Mutex;
use tracing::debug;

/// Opaque reference to an embedded stylesheet, used to remove it later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleHandle(u64);

impl StyleHandle {
    /// Handle for a host-assigned stylesheet id
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Host-assigned stylesheet id
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Embeds compiled CSS into the active document
pub trait StyleInjector: Send + Sync {
    /// Embed `css` as an active stylesheet
    fn add_stylesheet(&self, css: &str) -> StyleHandle;

    /// Remove a previously embedded stylesheet; returns whether it was present
    fn remove_stylesheet(&self, handle: StyleHandle) -> bool;
}

#[derive(Debug, Default)]
struct Document {
    next_id: u64,
    removed: u64,
    sheets: Vec<(StyleHandle, String)>,
}

/// In-memory document holding the ordered list of embedded stylesheets
///
/// Hosts that render a single stylesheet read it through [`combined`].
///
/// [`combined`]: EmbeddedStyles::combined
#[derive(Debug, Default)]
pub struct EmbeddedStyles {
    document: Mutex<Document>,
}

impl EmbeddedStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active stylesheets in insertion order
    pub fn sheets(&self) -> Vec<String> {
        self.document
            .lock()
            .sheets
            .iter()
            .map(|(_, css)| css.clone())
            .collect()
    }

    /// CSS text of an active stylesheet
    pub fn css_for(&self, handle: StyleHandle) -> Option<String> {
        self.document
            .lock()
            .sheets
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, css)| css.clone())
    }

    /// Whether the stylesheet is still embedded
    pub fn contains(&self, handle: StyleHandle) -> bool {
        self.document.lock().sheets.iter().any(|(h, _)| *h == handle)
    }

    /// All active stylesheets joined in insertion order
    pub fn combined(&self) -> String {
        self.sheets().join("\n")
    }

    /// Number of embedded stylesheets
    pub fn len(&self) -> usize {
        self.document.lock().sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stylesheets ever added
    pub fn added_count(&self) -> u64 {
        self.document.lock().next_id
    }

    /// Number of stylesheets ever removed
    pub fn removed_count(&self) -> u64 {
        self.document.lock().removed
    }
}

impl StyleInjector for EmbeddedStyles {
    fn add_stylesheet(&self, css: &str) -> StyleHandle {
        let mut document = self.document.lock();
        document.next_id += 1;
        let handle = StyleHandle(document.next_id);
        document.sheets.push((handle, css.to_string()));
        debug!("Embedded stylesheet {} ({} bytes)", handle.0, css.len());
        handle
    }

    fn remove_stylesheet(&self, handle: StyleHandle) -> bool {
        let mut document = self.document.lock();
        let before = document.sheets.len();
        document.sheets.retain(|(h, _)| *h != handle);
        let removed = document.sheets.len() != before;
        if removed {
            document.removed += 1;
            debug!("Removed stylesheet {}", handle.0);
        }
        removed
    }
}
