//! Hadoop distribution configurer registry.
//!
//! Selects a distribution-specific environment setup strategy (a
//! [`Configurer`]) either by name or by probing the runtime environment
//! for an installed distribution. Candidates are registered in a fixed,
//! ordered table; the registry learns each candidate's distribution name
//! once at startup and afterwards hands out a fresh instance on every
//! resolution.
//!
//! # Modules
//!
//! - [`configurer`] - The Configurer trait and built-in distribution strategies
//! - [`error`] - Error types and result alias
//! - [`registry`] - Candidate registration, lookup, and auto-detection
//!
//! # Example
//!
//! ```
//! use hadoop_configurer::ConfigurerRegistry;
//!
//! let registry = ConfigurerRegistry::global();
//! let configurer = match registry.auto_detect() {
//!     Some(detected) => detected,
//!     // Nothing detected: fall back to the manually-selectable set,
//!     // which always contains at least the generic strategy.
//!     None => registry.list_usable().remove(0),
//! };
//! println!("using {} configurer", configurer.distribution_name());
//! ```

pub mod configurer;
pub mod error;
pub mod registry;

pub use configurer::Configurer;
pub use error::{ConfigurerError, Result};
pub use registry::ConfigurerRegistry;
