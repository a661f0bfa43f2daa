//! Configurer registration, lookup-by-name, and auto-detection.
//!
//! The registry holds a fixed, ordered table of candidate configurers.
//! On construction it runs every candidate's factory once to learn the
//! distribution name it registers under; afterwards the table is
//! immutable and every resolution call constructs a fresh instance that
//! the caller owns. Scans iterate candidates in registration order, so
//! detection results are deterministic.
//!
//! A candidate whose factory fails is skipped during registration and
//! scans rather than breaking the registry; those failures are recorded
//! at debug level so a broken install can still be diagnosed.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::configurer::{ClouderaConfigurer, Configurer, GenericConfigurer, MapRConfigurer};
use crate::error::{ConfigurerError, Result};

/// Zero-argument constructor producing a fresh configurer instance.
pub type ConfigurerFactory = fn() -> anyhow::Result<Box<dyn Configurer>>;

/// One entry in a candidate table.
#[derive(Clone, Copy)]
pub struct Candidate {
    /// Stable programmatic identifier, independent of the display name
    /// the instance reports.
    pub id: &'static str,
    pub factory: ConfigurerFactory,
}

/// Built-in candidates, in registration order.
const CANDIDATES: &[Candidate] = &[
    Candidate {
        id: "generic",
        factory: || Ok(Box::new(GenericConfigurer::new())),
    },
    Candidate {
        id: "cloudera",
        factory: || Ok(Box::new(ClouderaConfigurer::new())),
    },
    Candidate {
        id: "mapr",
        factory: || Ok(Box::new(MapRConfigurer::new())),
    },
];

struct RegistryEntry {
    name: String,
    candidate: Candidate,
}

/// Registry of known distribution configurers.
///
/// Immutable once constructed; all operations are reads plus fresh
/// instance construction and may run concurrently without coordination.
pub struct ConfigurerRegistry {
    /// Successfully registered candidates, registration order preserved.
    entries: Vec<RegistryEntry>,
    /// Distribution name to index into `entries`. Always a subset of the
    /// candidate table, never a superset.
    by_name: HashMap<String, usize>,
}

impl ConfigurerRegistry {
    /// Registry over the built-in candidate table.
    pub fn new() -> Self {
        Self::from_candidates(CANDIDATES)
    }

    /// Registry over an explicit candidate table.
    ///
    /// Each factory runs once here to learn the name the candidate
    /// registers under. Candidates whose factory fails are skipped; a
    /// duplicate distribution name replaces the earlier registration.
    pub fn from_candidates(candidates: &[Candidate]) -> Self {
        let mut entries: Vec<RegistryEntry> = Vec::with_capacity(candidates.len());
        let mut by_name = HashMap::new();

        for candidate in candidates {
            let name = match (candidate.factory)() {
                Ok(configurer) => configurer.distribution_name().to_string(),
                Err(err) => {
                    debug!(id = candidate.id, error = %err, "skipping candidate: construction failed");
                    continue;
                }
            };
            match by_name.get(&name) {
                Some(&index) => {
                    debug!(
                        id = candidate.id,
                        name = %name,
                        "duplicate distribution name, last registration wins"
                    );
                    entries[index] = RegistryEntry {
                        name,
                        candidate: *candidate,
                    };
                }
                None => {
                    by_name.insert(name.clone(), entries.len());
                    entries.push(RegistryEntry {
                        name,
                        candidate: *candidate,
                    });
                }
            }
        }

        Self { entries, by_name }
    }

    /// Process-wide registry over the built-in table, built once on first
    /// access.
    pub fn global() -> &'static ConfigurerRegistry {
        static REGISTRY: OnceLock<ConfigurerRegistry> = OnceLock::new();
        REGISTRY.get_or_init(ConfigurerRegistry::new)
    }

    /// Distribution names with a registered configurer, in registration
    /// order.
    pub fn known_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Construct a fresh instance of the configurer registered under
    /// `name` (exact, case-sensitive match). Every call returns a new
    /// instance owned by the caller.
    ///
    /// # Errors
    ///
    /// [`ConfigurerError::UnknownDistribution`] when no configurer is
    /// registered under `name`; [`ConfigurerError::ConstructionFailed`]
    /// when one is registered but its factory fails.
    pub fn resolve(&self, name: &str) -> Result<Box<dyn Configurer>> {
        let index = *self
            .by_name
            .get(name)
            .ok_or_else(|| ConfigurerError::UnknownDistribution {
                name: name.to_string(),
            })?;
        let entry = &self.entries[index];
        (entry.candidate.factory)().map_err(|source| ConfigurerError::ConstructionFailed {
            distribution: entry.name.clone(),
            source,
        })
    }

    /// Scan detectable candidates in registration order and return the
    /// first whose environment probing reports its distribution present,
    /// or `None` when nothing is detected.
    ///
    /// Per-candidate construction failures are logged and skipped; this
    /// never errors.
    pub fn auto_detect(&self) -> Option<Box<dyn Configurer>> {
        for entry in &self.entries {
            let configurer = match (entry.candidate.factory)() {
                Ok(configurer) => configurer,
                Err(err) => {
                    debug!(name = %entry.name, error = %err, "skipping candidate during detection: construction failed");
                    continue;
                }
            };
            if !configurer.is_detectable() {
                continue;
            }
            if configurer.is_available() {
                debug!(name = %entry.name, "auto-detected distribution");
                return Some(configurer);
            }
        }
        None
    }

    /// Configurers that require manual selection (those that cannot
    /// self-detect), in registration order. Use this to offer choices
    /// when [`auto_detect`](Self::auto_detect) comes up empty.
    ///
    /// Never empty: when every registered candidate is detectable, the
    /// result is exactly the generic configurer.
    ///
    /// # Panics
    ///
    /// Panics if the generic fallback cannot be resolved. The generic
    /// candidate is part of the built-in table, so its absence means the
    /// registry itself is misconfigured, not a runtime condition.
    pub fn list_usable(&self) -> Vec<Box<dyn Configurer>> {
        let mut usable = Vec::new();
        for entry in &self.entries {
            match (entry.candidate.factory)() {
                Ok(configurer) if !configurer.is_detectable() => usable.push(configurer),
                Ok(_) => {}
                Err(err) => {
                    debug!(name = %entry.name, error = %err, "skipping candidate during listing: construction failed");
                }
            }
        }

        if usable.is_empty() {
            let fallback = self
                .resolve(GenericConfigurer::DISTRIBUTION_NAME)
                .unwrap_or_else(|err| {
                    panic!("registry misconfigured: generic configurer unavailable: {err}")
                });
            usable.push(fallback);
        }

        usable
    }
}

impl Default for ConfigurerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
