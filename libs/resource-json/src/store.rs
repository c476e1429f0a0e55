//! Resource stores.
//!
//! A resource store maps a resource id, a relative `/` separated path such as
//! `fixtures/users.json`, to the bytes of a bundled resource. Stores are read-only.

use std::{
    borrow::Cow,
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::trace;

/// A read-only set of bundled resources.
pub trait ResourceStore: Send + Sync {
    /// Load the content of a resource.
    ///
    /// Returns `Ok(None)` when the id does not resolve to a resource.
    fn load(&self, id: &str) -> io::Result<Option<Vec<u8>>>;
}

/// Converts a resource id into a relative path.
///
/// Ids that are empty, absolute, or that contain empty, `.` or `..` segments never resolve.
fn relative_path(id: &str) -> Option<PathBuf> {
    let mut path = PathBuf::new();
    for segment in id.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}

/// Resources laid out under one or more root directories.
///
/// Roots are searched in order and the first one containing the resource wins, the way a
/// classpath is searched.
#[derive(Clone, Debug)]
pub struct DirectoryStore {
    roots: Vec<PathBuf>,
}

impl DirectoryStore {
    /// Creates a store searching the given roots, in order.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { roots: roots.into_iter().map(Into::into).collect() }
    }

    /// The roots this store searches.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Finds the file backing a resource, if any.
    pub fn locate(&self, id: &str) -> Option<PathBuf> {
        let relative = relative_path(id)?;
        self.roots.iter().map(|root| root.join(&relative)).find(|path| Self::is_resource(id, path))
    }

    fn is_resource(id: &str, path: &Path) -> bool {
        let found = path.is_file();
        trace!(id, path = %path.display(), found, "resolving resource");
        found
    }
}

impl ResourceStore for DirectoryStore {
    fn load(&self, id: &str) -> io::Result<Option<Vec<u8>>> {
        let Some(path) = self.locate(id) else {
            return Ok(None);
        };
        match fs::read(&path) {
            Ok(content) => Ok(Some(content)),
            // Removed between lookup and read.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Resources held in memory, typically compiled in with `include_bytes!`.
#[derive(Clone, Debug, Default)]
pub struct EmbeddedStore {
    resources: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource, replacing any previous resource with the same id.
    pub fn insert<I, C>(&mut self, id: I, content: C)
    where
        I: Into<String>,
        C: Into<Cow<'static, [u8]>>,
    {
        self.resources.insert(id.into(), content.into());
    }

    /// Adds a resource and returns the store.
    pub fn with_resource<I, C>(mut self, id: I, content: C) -> Self
    where
        I: Into<String>,
        C: Into<Cow<'static, [u8]>>,
    {
        self.insert(id, content);
        self
    }
}

impl ResourceStore for EmbeddedStore {
    fn load(&self, id: &str) -> io::Result<Option<Vec<u8>>> {
        let content = self.resources.get(id).map(|content| content.to_vec());
        trace!(id, found = content.is_some(), "resolving embedded resource");
        Ok(content)
    }
}
