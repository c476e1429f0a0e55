//! Fixture writing.

use crate::{error::ResourceError, string::write_string};
use serde::Serialize;
use std::{
    io,
    path::{Component, Path, PathBuf},
};
use tracing::debug;

/// Writes values as pretty-printed JSON files under a fixture root.
#[derive(Clone, Debug)]
pub struct FixtureWriter {
    root: PathBuf,
}

impl FixtureWriter {
    /// Creates a writer for the given fixture root.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The directory fixtures are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a value to `path`, relative to the fixture root, and return the file's full path.
    ///
    /// Missing parent directories are created and any existing file is replaced. Paths that are
    /// absolute or that contain `..` are rejected, so nothing is ever written outside the root.
    pub fn write_json<T, P>(&self, value: &T, path: P) -> Result<PathBuf, ResourceError>
    where
        T: Serialize + ?Sized,
        P: AsRef<Path>,
    {
        let relative = path.as_ref();
        let path = self.root.join(relative);
        if !is_contained(relative) {
            let source = io::Error::new(io::ErrorKind::InvalidInput, "fixture path must stay under the fixture root");
            return Err(ResourceError::Write { path, source });
        }
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| ResourceError::Write { path: path.clone(), source: io::Error::from(e) })?;
        write_string(&path, &content).map_err(|e| ResourceError::Write { path: path.clone(), source: e })?;
        debug!(path = %path.display(), bytes = content.len(), "wrote fixture");
        Ok(path)
    }
}

/// Whether a path is relative, names a file and never walks up a directory.
fn is_contained(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some() && components.all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
