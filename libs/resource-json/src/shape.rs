//! Shape descriptors.
//!
//! A shape names the container a resource is reconstructed into. Shapes are zero sized marker
//! types that are only ever used as type arguments:
//!
//! ```no_run
//! use resource_json::{shape::MapOfList, DirectoryStore, ResourceDecoder};
//!
//! let decoder = ResourceDecoder::new(DirectoryStore::new(["tests/resources"]));
//! let groups = decoder.decode::<MapOfList<u32, String>>("groups.json")?;
//! # Ok::<(), resource_json::ResourceError>(())
//! ```

use serde::de::DeserializeOwned;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
    hash::Hash,
    marker::PhantomData,
};

/// The kind of a shape, used when reporting on a decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A single value.
    Scalar,

    /// An ordered sequence.
    List,

    /// A mapping with unique keys.
    Map,

    /// A mapping whose values are ordered sequences.
    MapOfList,

    /// A mapping whose values are mappings.
    MapOfMap,
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Scalar => "scalar",
            Self::List => "list",
            Self::Map => "map",
            Self::MapOfList => "map of lists",
            Self::MapOfMap => "map of maps",
        };
        f.write_str(name)
    }
}

/// A target shape for decoding.
pub trait Shape {
    /// The reconstructed value.
    type Output: DeserializeOwned;

    /// The kind of this shape.
    const KIND: ShapeKind;
}

/// A single `T`.
pub struct Scalar<T>(PhantomData<fn() -> T>);

/// An ordered sequence of `T`.
pub struct List<T>(PhantomData<fn() -> T>);

/// A mapping from `K` to `V`.
pub struct Map<K, V>(PhantomData<fn() -> (K, V)>);

/// A mapping from `K` to an ordered sequence of `V`.
pub struct MapOfList<K, V>(PhantomData<fn() -> (K, V)>);

/// A mapping from `K` to a mapping from `K2` to `V2`.
pub struct MapOfMap<K, K2, V2>(PhantomData<fn() -> (K, K2, V2)>);

impl<T: DeserializeOwned> Shape for Scalar<T> {
    type Output = T;

    const KIND: ShapeKind = ShapeKind::Scalar;
}

impl<T: DeserializeOwned> Shape for List<T> {
    type Output = Vec<T>;

    const KIND: ShapeKind = ShapeKind::List;
}

impl<K, V> Shape for Map<K, V>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    type Output = HashMap<K, V>;

    const KIND: ShapeKind = ShapeKind::Map;
}

impl<K, V> Shape for MapOfList<K, V>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
{
    type Output = HashMap<K, Vec<V>>;

    const KIND: ShapeKind = ShapeKind::MapOfList;
}

impl<K, K2, V2> Shape for MapOfMap<K, K2, V2>
where
    K: DeserializeOwned + Eq + Hash,
    K2: DeserializeOwned + Eq + Hash,
    V2: DeserializeOwned,
{
    type Output = HashMap<K, HashMap<K2, V2>>;

    const KIND: ShapeKind = ShapeKind::MapOfMap;
}
