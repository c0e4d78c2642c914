//! Hue Configuration
//!
//! Settings and defaults for the theme system: editor font settings, the
//! scrollbar customization toggle, the active theme selection and the ordered
//! list of directories searched for theme files.

pub mod defaults;
pub mod error;
pub mod loader;
pub mod types;

pub use error::{ConfigError, Result};
pub use types::{SearchPath, Settings, ThemeSelection};
