//! Typed loading of bundled JSON resources.
//!
//! Resources are looked up by id in a [`ResourceStore`] and decoded into one of the shapes in
//! [`shape`]: a single value, a list, a map, a map of lists or a map of maps. Date and time values
//! follow the fixed convention in [`temporal`]. [`FixtureWriter`] writes values back as
//! pretty-printed JSON when authoring fixtures, and [`fixtures`] offers all of it as free functions
//! bound to the resource directories of the crate under test.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod json;
pub mod resources;
pub mod shape;
pub mod store;
pub mod string;
pub mod temporal;
pub mod writer;

pub use crate::{
    config::ResourceConfig,
    error::{ContentError, ResourceError},
    json::ResourceDecoder,
    resources::Resources,
    store::{DirectoryStore, EmbeddedStore, ResourceStore},
    writer::FixtureWriter,
};
