//! Script file loading

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load a script file into a single string.
///
/// Encoding problems surface here as load failures; the splitter only ever
/// sees valid UTF-8.
pub fn load_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })
}
