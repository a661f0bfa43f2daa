//! Error types for configurer resolution.
//!
//! This module defines [`ConfigurerError`], the error type returned by
//! direct registry lookups, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Direct `resolve(name)` calls surface errors: the caller asked for a
//!   specific distribution and silent substitution would be incorrect
//! - Scan operations (`auto_detect`, `list_usable`) never surface
//!   per-candidate failures; those are logged and skipped
//! - A missing generic fallback is an invariant violation, signaled by
//!   panic rather than an error variant

use thiserror::Error;

/// Errors surfaced by direct configurer resolution.
#[derive(Debug, Error)]
pub enum ConfigurerError {
    /// Requested distribution name has no registered configurer.
    #[error("Unknown Hadoop distribution: {name}")]
    UnknownDistribution { name: String },

    /// The candidate is registered but its constructor failed.
    #[error("Failed to construct configurer for '{distribution}'")]
    ConstructionFailed {
        distribution: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Result type alias for configurer operations.
pub type Result<T> = std::result::Result<T, ConfigurerError>;
