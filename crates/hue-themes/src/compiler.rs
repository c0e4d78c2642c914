//! Style compilation
//!
//! Theme content is wrapped in `.{class_name} { ... }` and run through the
//! SCSS compiler, which nests every rule under the theme's class.

use grass::{Options, OutputStyle};
use tracing::debug;

use crate::error::{Result, ThemeError};

/// Compiles theme content into plain CSS scoped under a class name
#[derive(Debug, Clone, Default)]
pub struct StyleCompiler {
    compressed: bool,
}

impl StyleCompiler {
    /// Compiler producing expanded CSS
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler producing compressed CSS
    pub fn compressed() -> Self {
        Self { compressed: true }
    }

    /// Compile `content` scoped under `.{class_name}`
    pub fn compile(&self, content: &str, class_name: &str) -> Result<String> {
        let source = format!(".{}{{{}}}", class_name, content);
        let style = if self.compressed {
            OutputStyle::Compressed
        } else {
            OutputStyle::Expanded
        };

        let css = grass::from_string(source, &Options::default().style(style)).map_err(|e| {
            ThemeError::Compile {
                class_name: class_name.to_string(),
                message: e.to_string(),
            }
        })?;

        debug!("Compiled {} into {} bytes of CSS", class_name, css.len());
        Ok(css)
    }
}
