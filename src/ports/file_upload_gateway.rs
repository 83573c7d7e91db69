//! File upload gateway port.
//!
//! Accepts spreadsheet uploads (templates, store lists) and serves sample
//! files. Content is never parsed here.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::domain::foundation::{DomainError, Timestamp};

/// What an uploaded file is meant to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Template,
    StoreList,
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadKind::Template => write!(f, "template"),
            UploadKind::StoreList => write!(f, "store list"),
        }
    }
}

/// Receipt for an accepted upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadAcknowledgement {
    pub kind: UploadKind,
    pub file_name: String,
    pub message: String,
    pub received_at: Timestamp,
}

#[async_trait]
pub trait FileUploadGateway: Send + Sync {
    /// Accepts a file by name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the file name is blank
    async fn upload(
        &self,
        kind: UploadKind,
        file_name: &str,
    ) -> Result<UploadAcknowledgement, DomainError>;

    /// Starts a download of the sample file for `kind`.
    async fn download_sample(&self, kind: UploadKind) -> Result<(), DomainError>;
}
