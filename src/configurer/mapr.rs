//! MapR distribution detection.
//!
//! Every MapR client and node install writes `conf/mapr-clusters.conf`
//! under its root, which makes it a reliable presence marker. Detection
//! checks the `MAPR_HOME` env var first, then the stock `/opt/mapr` root.

use std::path::PathBuf;

use super::probe::{locate_install_root, EnvLookup};
use super::Configurer;

/// Setup strategy for the MapR distribution.
#[derive(Debug)]
pub struct MapRConfigurer {
    env: EnvLookup,
    default_roots: Vec<PathBuf>,
}

impl MapRConfigurer {
    pub const DISTRIBUTION_NAME: &'static str = "mapr";

    const ENV_VAR: &'static str = "MAPR_HOME";
    const MARKER: &'static str = "conf/mapr-clusters.conf";

    pub fn new() -> Self {
        Self::with_probe(|var| std::env::var(var), vec![PathBuf::from("/opt/mapr")])
    }

    /// Construct with a custom env lookup and root set.
    ///
    /// This allows testing without modifying actual environment variables
    /// or touching system paths.
    pub fn with_probe(env: EnvLookup, default_roots: Vec<PathBuf>) -> Self {
        Self { env, default_roots }
    }

    /// The detected MapR install root, if any.
    pub fn install_root(&self) -> Option<PathBuf> {
        locate_install_root(
            Some(Self::ENV_VAR),
            &self.default_roots,
            Self::MARKER,
            &self.env,
        )
    }
}

impl Default for MapRConfigurer {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurer for MapRConfigurer {
    fn distribution_name(&self) -> &str {
        Self::DISTRIBUTION_NAME
    }

    fn is_available(&self) -> bool {
        self.install_root().is_some()
    }

    fn is_detectable(&self) -> bool {
        true
    }
}
