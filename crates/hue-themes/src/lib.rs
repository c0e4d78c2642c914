//! Hue Theme System
//!
//! Loads stylesheet themes for the editor. A theme file is read through a
//! [`hue_files::FileReader`], its `::-webkit-scrollbar` rules are pulled out
//! into a separate block, the rest is compiled scoped under the theme's class
//! name, and the resulting CSS is handed to a [`StyleInjector`].

pub mod compiler;
pub mod error;
pub mod extract;
pub mod injector;
pub mod manager;
pub mod registry;
pub mod theme;

pub use compiler::StyleCompiler;
pub use error::{Result, ThemeError};
pub use extract::{extract_scrollbars, Extracted};
pub use injector::{EmbeddedStyles, StyleHandle, StyleInjector};
pub use manager::ThemeManager;
pub use registry::ThemeRegistry;
pub use theme::{Theme, ThemeOptions};
