//! The generic fallback configurer.
//!
//! The generic strategy makes no assumptions about which vendor shipped
//! the Hadoop install and so cannot probe for one. It exists so callers
//! always have a manually-selectable option when no vendor-specific
//! distribution is detected.

use super::Configurer;

/// Vendor-neutral setup strategy; the always-selectable manual fallback.
#[derive(Debug, Default)]
pub struct GenericConfigurer;

impl GenericConfigurer {
    /// Registry key for the generic strategy. The registry's fallback
    /// guarantee depends on a configurer being registered under this name.
    pub const DISTRIBUTION_NAME: &'static str = "generic";

    pub fn new() -> Self {
        Self
    }
}

impl Configurer for GenericConfigurer {
    fn distribution_name(&self) -> &str {
        Self::DISTRIBUTION_NAME
    }

    /// Always true: a vendor-neutral setup can be attempted against any
    /// install the user points it at.
    fn is_available(&self) -> bool {
        true
    }

    /// The generic strategy has nothing to probe for.
    fn is_detectable(&self) -> bool {
        false
    }
}
