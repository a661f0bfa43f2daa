//! Cloudera (CDH) distribution detection.
//!
//! CDH installs carry a `cloudera/` metadata directory inside the Hadoop
//! root. Detection checks the `CDH_HOME` env var first, then the parcel
//! and package install roots Cloudera uses by default.

use std::path::PathBuf;

use super::probe::{locate_install_root, EnvLookup};
use super::Configurer;

/// Setup strategy for Cloudera's CDH distribution.
#[derive(Debug)]
pub struct ClouderaConfigurer {
    env: EnvLookup,
    default_roots: Vec<PathBuf>,
}

impl ClouderaConfigurer {
    pub const DISTRIBUTION_NAME: &'static str = "cloudera";

    const ENV_VAR: &'static str = "CDH_HOME";
    /// Metadata directory CDH ships inside the Hadoop install root.
    const MARKER: &'static str = "cloudera";

    pub fn new() -> Self {
        Self::with_probe(
            |var| std::env::var(var),
            vec![
                PathBuf::from("/opt/cloudera/parcels/CDH"),
                PathBuf::from("/usr/lib/hadoop"),
            ],
        )
    }

    /// Construct with a custom env lookup and root set.
    ///
    /// This allows testing without modifying actual environment variables
    /// or touching system paths.
    pub fn with_probe(env: EnvLookup, default_roots: Vec<PathBuf>) -> Self {
        Self { env, default_roots }
    }

    /// The detected CDH install root, if any.
    pub fn install_root(&self) -> Option<PathBuf> {
        locate_install_root(
            Some(Self::ENV_VAR),
            &self.default_roots,
            Self::MARKER,
            &self.env,
        )
    }
}

impl Default for ClouderaConfigurer {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurer for ClouderaConfigurer {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn env_unset(_: &str) -> Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    #[test]
    fn reports_cloudera_name_and_detectable() {
        let configurer = ClouderaConfigurer::new();
        assert_eq!(
            configurer.distribution_name(),
            ClouderaConfigurer::DISTRIBUTION_NAME
        );
        assert!(configurer.is_detectable());
    }

    #[test]
    fn available_when_marker_dir_present() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("hadoop");
        fs::create_dir_all(root.join("cloudera")).unwrap();

        let configurer = ClouderaConfigurer::with_probe(env_unset, vec![root.clone()]);
        assert!(configurer.is_available());
        assert_eq!(configurer.install_root(), Some(root));
    }

    #[test]
    fn unavailable_when_root_lacks_marker() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("hadoop");
        fs::create_dir_all(&root).unwrap();

        let configurer = ClouderaConfigurer::with_probe(env_unset, vec![root]);
        assert!(!configurer.is_available());
    }

    #[test]
    fn unavailable_when_nothing_probed() {
        let configurer =
            ClouderaConfigurer::with_probe(env_unset, vec![PathBuf::from("/nonexistent")]);
        assert!(!configurer.is_available());
        assert!(configurer.install_root().is_none());
    }
}
