//! Upload gateway that accepts files without reading them.
//!
//! Every call is acknowledged through the notifier, the way the portal
//! reports a pending import.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::{
    Clock, FileUploadGateway, Notification, Notifier, UploadAcknowledgement, UploadKind,
};

pub struct SimulatedUploadGateway {
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl SimulatedUploadGateway {
    pub fn new(notifier: Arc<dyn Notifier>, clock: Arc<dyn Clock>) -> Self {
        Self { notifier, clock }
    }
}

#[async_trait]
impl FileUploadGateway for SimulatedUploadGateway {
    async fn upload(
        &self,
        kind: UploadKind,
        file_name: &str,
    ) -> Result<UploadAcknowledgement, DomainError> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(ValidationError::empty_field("file_name").into());
        }

        let message = format!("Simulating upload for: {}", file_name);
        tracing::info!(%kind, file_name, "Upload received");
        self.notifier.notify(Notification::info(message.clone())).await?;

        Ok(UploadAcknowledgement {
            kind,
            file_name: file_name.to_string(),
            message,
            received_at: self.clock.now(),
        })
    }

    async fn download_sample(&self, kind: UploadKind) -> Result<(), DomainError> {
        tracing::debug!(%kind, "Sample download requested");
        self.notifier
            .notify(Notification::info("Downloading sample CSV..."))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryNotifier};
    use crate::domain::foundation::ErrorCode;

    fn gateway() -> (SimulatedUploadGateway, InMemoryNotifier) {
        let notifier = InMemoryNotifier::new();
        let gateway = SimulatedUploadGateway::new(
            Arc::new(notifier.clone()),
            Arc::new(FixedClock::at("2024-03-20T09:00:00Z").unwrap()),
        );
        (gateway, notifier)
    }

    #[tokio::test]
    async fn upload_is_acknowledged_and_announced() {
        let (gateway, notifier) = gateway();
        let ack = gateway
            .upload(UploadKind::Template, "retail_audit.csv")
            .await
            .unwrap();

        assert_eq!(ack.file_name, "retail_audit.csv");
        assert_eq!(ack.message, "Simulating upload for: retail_audit.csv");
        assert_eq!(
            notifier.messages().await,
            vec!["Simulating upload for: retail_audit.csv"]
        );
    }

    #[tokio::test]
    async fn blank_file_name_is_rejected_silently() {
        let (gateway, notifier) = gateway();
        let err = gateway.upload(UploadKind::StoreList, "  ").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert!(notifier.sent().await.is_empty());
    }

    #[tokio::test]
    async fn sample_download_is_announced() {
        let (gateway, notifier) = gateway();
        gateway.download_sample(UploadKind::Template).await.unwrap();
        assert_eq!(notifier.messages().await, vec!["Downloading sample CSV..."]);
    }
}
