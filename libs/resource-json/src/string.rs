//! This module implements the I/O operations for text content

use crate::error::{ContentError, ResourceError};
use std::{fs, io, path::Path};

/// Decode the content of a resource as UTF-8 text
pub fn decode_text(id: &str, content: Vec<u8>) -> Result<String, ResourceError> {
    String::from_utf8(content)
        .map_err(|e| ResourceError::MalformedContent { id: id.to_string(), source: ContentError::Encoding(e) })
}

/// Write text into a file, creating its missing parent directories
pub fn write_string<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
