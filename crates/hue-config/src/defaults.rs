//! Default values for settings

use std::path::PathBuf;

pub const FONT_SIZE: u32 = 12;
pub const LINE_HEIGHT: &str = "1.3em";
pub const FONT_FAMILY: &str = "'SourceCodePro-Medium', ＭＳ ゴシック, 'MS Gothic', monospace";
pub const CUSTOM_SCROLLBARS: bool = true;
pub const THEME: &str = "default";

/// Directory holding the themes shipped alongside the editor
pub const BUNDLED_THEMES_DIR: &str = "themes";

/// User themes directory: `<config_dir>/hue/themes`
pub fn user_themes_directory() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hue").join("themes"))
}
