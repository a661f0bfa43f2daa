//! The Configurer capability and built-in distribution strategies.
//!
//! A [`Configurer`] represents one Hadoop distribution's environment setup
//! strategy: it knows its own display name, whether it can probe the
//! runtime environment for its distribution at all, and whether that
//! distribution is currently present.
//!
//! # Modules
//!
//! - [`probe`] - Env var and filesystem probing shared by detectable configurers
//! - [`generic`] - The manual fallback strategy, always selectable
//! - [`cloudera`] - CDH detection via `CDH_HOME` and well-known install roots
//! - [`mapr`] - MapR detection via `MAPR_HOME` and the cluster config marker

pub mod cloudera;
pub mod generic;
pub mod mapr;
pub mod probe;

pub use cloudera::ClouderaConfigurer;
pub use generic::GenericConfigurer;
pub use mapr::MapRConfigurer;

/// A distribution-specific environment setup strategy.
///
/// Implementations must be constructible with no required arguments; the
/// registry only ever creates default-constructed instances through
/// zero-argument factories.
pub trait Configurer: std::fmt::Debug {
    /// Stable display name identifying the distribution.
    ///
    /// Unique across all registered configurers; used as the registry
    /// lookup key. Must be pure and side-effect free.
    fn distribution_name(&self) -> &str;

    /// Whether this distribution appears present in the current environment.
    ///
    /// May probe env vars and the filesystem. Absence is a normal `false`,
    /// never an error.
    fn is_available(&self) -> bool;

    /// Whether this configurer can self-detect availability at all.
    ///
    /// Strategies that always require explicit manual selection return
    /// `false`.
    fn is_detectable(&self) -> bool;
}
