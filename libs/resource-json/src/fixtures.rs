//! Process wide helpers for tests.
//!
//! These read from the resource directories of the crate being tested (`tests/resources`, then
//! `resources`) and write under `tests/resources`. The layout is resolved on first use and stays
//! fixed for the lifetime of the process.

use crate::{error::ResourceError, resources::Resources};
use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::HashMap,
    hash::Hash,
    path::{Path, PathBuf},
};

static RESOURCES: Lazy<Resources> = Lazy::new(Resources::default);

/// The resources used by the helpers in this module.
pub fn resources() -> &'static Resources {
    &RESOURCES
}

/// Read a single value from a resource.
pub fn read_json<T: DeserializeOwned>(id: &str) -> Result<T, ResourceError> {
    RESOURCES.decoder().read_json(id)
}

/// Read an ordered sequence of values from a resource.
pub fn read_json_list<T: DeserializeOwned>(id: &str) -> Result<Vec<T>, ResourceError> {
    RESOURCES.decoder().read_json_list(id)
}

/// Read a mapping from a resource.
pub fn read_json_map<K, V>(id: &str) -> Result<HashMap<K, V>, ResourceError>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    RESOURCES.decoder().read_json_map(id)
}

/// Read a mapping whose values are ordered sequences from a resource.
pub fn read_json_map_of_lists<K, V>(id: &str) -> Result<HashMap<K, Vec<V>>, ResourceError>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    RESOURCES.decoder().read_json_map_of_lists(id)
}

/// Read a mapping whose values are mappings from a resource.
pub fn read_json_map_of_maps<K, K2, V2>(id: &str) -> Result<HashMap<K, HashMap<K2, V2>>, ResourceError>
where
    K: DeserializeOwned + Eq + Hash,
    K2: DeserializeOwned + Eq + Hash,
    V2: DeserializeOwned,
{
    RESOURCES.decoder().read_json_map_of_maps(id)
}

/// Read the raw text of a resource.
pub fn read_resource_as_string(id: &str) -> Result<String, ResourceError> {
    RESOURCES.decoder().read_string(id)
}

/// Write a value as pretty-printed JSON under `tests/resources`.
pub fn write_json_to_fixtures<T, P>(value: &T, path: P) -> Result<PathBuf, ResourceError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    RESOURCES.writer().write_json(value, path)
}
