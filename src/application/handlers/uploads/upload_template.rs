//! UploadTemplateHandler - spreadsheet imports for templates and store lists.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{FileUploadGateway, UploadAcknowledgement, UploadKind};

/// Command to upload a spreadsheet.
#[derive(Debug, Clone)]
pub struct UploadTemplateCommand {
    pub kind: UploadKind,
    /// Name of the chosen file; blank means nothing was chosen.
    pub file_name: String,
}

/// Error type for uploads.
#[derive(Debug, Clone)]
pub enum UploadTemplateError {
    /// No file was chosen.
    NoFile,
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for UploadTemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadTemplateError::NoFile => write!(f, "No file selected"),
            UploadTemplateError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for UploadTemplateError {}

impl From<DomainError> for UploadTemplateError {
    fn from(err: DomainError) -> Self {
        UploadTemplateError::Domain(err)
    }
}

pub struct UploadTemplateHandler {
    gateway: Arc<dyn FileUploadGateway>,
}

impl UploadTemplateHandler {
    pub fn new(gateway: Arc<dyn FileUploadGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: UploadTemplateCommand,
    ) -> Result<UploadAcknowledgement, UploadTemplateError> {
        if cmd.file_name.trim().is_empty() {
            return Err(UploadTemplateError::NoFile);
        }
        Ok(self.gateway.upload(cmd.kind, &cmd.file_name).await?)
    }

    pub async fn download_sample(&self, kind: UploadKind) -> Result<(), UploadTemplateError> {
        Ok(self.gateway.download_sample(kind).await?)
    }
}
