#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use hue_files::{FileReader, ReadFailure};
use hue_themes::{EmbeddedStyles, StyleHandle, StyleInjector, Theme, ThemeOptions};

pub const THEME_DIR: &str = "/themes";

/// In-memory theme files with a read counter
#[derive(Default)]
pub struct MemoryReader {
    files: Mutex<HashMap<PathBuf, String>>,
    reads: AtomicUsize,
    unavailable: Mutex<bool>,
}

impl MemoryReader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert(&self, file_name: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(Path::new(THEME_DIR).join(file_name), content.to_string());
    }

    pub fn remove(&self, file_name: &str) {
        self.files
            .lock()
            .unwrap()
            .remove(&Path::new(THEME_DIR).join(file_name));
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileReader for MemoryReader {
    async fn read_to_string(&self, path: &Path) -> hue_files::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if *self.unavailable.lock().unwrap() {
            return Err(ReadFailure::Unavailable("reader closed".to_string()));
        }

        // Suspend like a real read so concurrent callers interleave
        tokio::task::yield_now().await;

        let content = self.files.lock().unwrap().get(path).cloned();
        content.ok_or_else(|| {
            ReadFailure::io(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })
    }
}

/// Injector that records the order of add/remove calls
#[derive(Default)]
pub struct RecordingInjector {
    styles: EmbeddedStyles,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingInjector {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn styles(&self) -> &EmbeddedStyles {
        &self.styles
    }
}

impl StyleInjector for RecordingInjector {
    fn add_stylesheet(&self, css: &str) -> StyleHandle {
        self.calls.lock().unwrap().push("add");
        self.styles.add_stylesheet(css)
    }

    fn remove_stylesheet(&self, handle: StyleHandle) -> bool {
        self.calls.lock().unwrap().push("remove");
        self.styles.remove_stylesheet(handle)
    }
}

pub fn theme(
    file_name: &str,
    reader: &Arc<MemoryReader>,
    styles: &Arc<EmbeddedStyles>,
) -> Theme {
    Theme::new(
        ThemeOptions::new(file_name, THEME_DIR),
        reader.clone(),
        styles.clone(),
    )
}

pub const MONOKAI: &str = r#"/* Monokai */
.CodeMirror { background: #272822; color: #f8f8f2; }
.CodeMirror ::-webkit-scrollbar { width: 12px; }
.CodeMirror-gutters { background: #272822; }
.CodeMirror ::-webkit-scrollbar-thumb { background: #49483e; }
"#;
