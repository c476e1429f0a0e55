//! Decoder and writer for one resource layout.

use crate::{config::ResourceConfig, json::ResourceDecoder, store::DirectoryStore, writer::FixtureWriter};

/// The decoder and the fixture writer for a [`ResourceConfig`].
///
/// Built once and never changed afterwards; it can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Resources {
    decoder: ResourceDecoder<DirectoryStore>,
    writer: FixtureWriter,
}

impl Resources {
    /// Creates the decoder and writer for a configuration.
    pub fn new(config: &ResourceConfig) -> Self {
        Self {
            decoder: ResourceDecoder::new(DirectoryStore::new(config.resource_roots.iter().cloned())),
            writer: FixtureWriter::new(config.fixture_root.clone()),
        }
    }

    /// The resource decoder.
    pub fn decoder(&self) -> &ResourceDecoder<DirectoryStore> {
        &self.decoder
    }

    /// The fixture writer.
    pub fn writer(&self) -> &FixtureWriter {
        &self.writer
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(&ResourceConfig::default())
    }
}
