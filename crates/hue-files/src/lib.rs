//! File access for the hue theme pipeline
//!
//! Theme loading never touches the file system directly. It goes through the
//! [`FileReader`] capability so hosts (and tests) can supply their own source
//! of theme text.

pub mod error;
pub mod reader;

pub use error::{ReadFailure, Result};
pub use reader::{FileReader, FsFileReader};
