//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Ask before closing a cycle
    #[serde(default = "default_require_close_confirmation")]
    pub require_close_confirmation: bool,
}

fn default_require_close_confirmation() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            require_close_confirmation: default_require_close_confirmation(),
        }
    }
}
