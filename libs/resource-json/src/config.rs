//! Resource configuration.

use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Where resources are read from and where fixtures are written to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// The directories searched for resources, in order.
    #[serde(default = "default_resource_roots")]
    pub resource_roots: Vec<PathBuf>,

    /// The directory fixtures are written under.
    #[serde(default = "default_fixture_root")]
    pub fixture_root: PathBuf,
}

impl ResourceConfig {
    /// Load the configuration from a YAML file.
    ///
    /// Any property can be overridden through environment variables prefixed with `RESOURCES__`,
    /// for example `RESOURCES__FIXTURE_ROOT=target/fixtures`. `RESOURCES__RESOURCE_ROOTS` takes a
    /// comma separated list.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        let source = config::File::from(path).format(config::FileFormat::Yaml);
        let environment = config::Environment::with_prefix("RESOURCES")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("resource_roots")
            .try_parsing(true);
        let config = config::Config::builder().add_source(source).add_source(environment).build()?;
        config.try_deserialize()
    }

    /// The layout of a crate: resources under `tests/resources` and then `resources`, fixtures
    /// written to `tests/resources`.
    pub fn for_manifest_dir<P: AsRef<Path>>(manifest_dir: P) -> Self {
        let manifest_dir = manifest_dir.as_ref();
        Self {
            resource_roots: default_resource_roots().into_iter().map(|root| manifest_dir.join(root)).collect(),
            fixture_root: manifest_dir.join(default_fixture_root()),
        }
    }
}

impl Default for ResourceConfig {
    /// The layout of the crate being run by cargo, or of the current directory outside of cargo.
    fn default() -> Self {
        let manifest_dir = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
        Self::for_manifest_dir(manifest_dir)
    }
}

fn default_resource_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("tests/resources"), PathBuf::from("resources")]
}

fn default_fixture_root() -> PathBuf {
    PathBuf::from("tests/resources")
}
