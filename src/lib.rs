//! Shared fixtures for the hue integration tests

use std::path::{Path, PathBuf};

/// Write a theme file into `dir`, returning its full path
pub fn write_theme(dir: &Path, file_name: &str, content: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, content)?;
    Ok(path)
}

/// A small dark theme with two scrollbar rules
pub const DARK_THEME: &str = r#"/* Dark theme */
$bg: #1e1e1e;

.CodeMirror {
  background: $bg;
  color: #d4d4d4;
}

.CodeMirror ::-webkit-scrollbar {
  width: 10px;
}

.CodeMirror-cursor { border-left-color: #aeafad; }

.CodeMirror ::-webkit-scrollbar-thumb {
  background: #424242;
}
"#;
