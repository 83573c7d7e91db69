//! Session configuration - who the demo user is and where data comes from.

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::foundation::UserRole;

use super::error::ConfigValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Role the portal opens in
    #[serde(default)]
    pub default_role: UserRole,

    #[serde(default = "default_user_name")]
    pub user_name: String,

    #[serde(default = "default_user_email")]
    pub user_email: String,

    /// Alternative YAML catalog; the built-in demo data is used when unset
    pub seed_path: Option<PathBuf>,
}

fn default_user_name() -> String {
    "Demo User".to_string()
}

fn default_user_email() -> String {
    "demo@fieldforce.com".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_role: UserRole::default(),
            user_name: default_user_name(),
            user_email: default_user_email(),
            seed_path: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.user_name.trim().is_empty() {
            return Err(ConfigValidationError::MissingRequired("session.user_name"));
        }
        let valid_email = self
            .user_email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
            .unwrap_or(false);
        if !valid_email {
            return Err(ConfigValidationError::InvalidUserEmail);
        }
        if let Some(path) = &self.seed_path {
            if !path.is_file() {
                return Err(ConfigValidationError::SeedFileNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}
