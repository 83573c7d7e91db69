//! SaveClientHandler - confirms an edited client and returns to the list.

use std::sync::Arc;

use crate::domain::catalog::Client;
use crate::domain::foundation::{ClientId, DomainError};
use crate::domain::navigation::Route;
use crate::ports::{Notification, Notifier};

/// Message shown once a client is saved.
pub const CLIENT_SAVED_MESSAGE: &str = "Client saved successfully (Mock)";

/// Command to save a client as edited in the client form.
#[derive(Debug, Clone)]
pub struct SaveClientCommand {
    pub client: Client,
}

/// Result of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveClientResult {
    /// Client that was saved.
    pub client_id: ClientId,
    /// Where the operator is sent next.
    pub redirect: Route,
}

/// Error type for saving a client.
#[derive(Debug, Clone)]
pub enum SaveClientError {
    /// Domain error.
    Domain(DomainError),
}

impl std::fmt::Display for SaveClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveClientError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SaveClientError {}

impl From<DomainError> for SaveClientError {
    fn from(err: DomainError) -> Self {
        SaveClientError::Domain(err)
    }
}

/// Acknowledges client edits. Nothing is persisted.
pub struct SaveClientHandler {
    notifier: Arc<dyn Notifier>,
}

impl SaveClientHandler {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub async fn handle(&self, cmd: SaveClientCommand) -> Result<SaveClientResult, SaveClientError> {
        let client = cmd.client;
        tracing::info!(
            client_id = %client.id,
            countries = client.countries_covered.len(),
            reports = client.report_config.reports.len(),
            "Client saved"
        );
        self.notifier
            .notify(Notification::success(CLIENT_SAVED_MESSAGE))
            .await?;
        Ok(SaveClientResult {
            client_id: client.id,
            redirect: Route::AdminClients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryNotifier;
    use crate::domain::catalog::{ColorKey, ReportField};
    use crate::ports::NotificationLevel;

    #[tokio::test]
    async fn save_notifies_and_returns_to_client_list() {
        let notifier = InMemoryNotifier::new();
        let handler = SaveClientHandler::new(Arc::new(notifier.clone()));

        let mut client = Client::draft(ClientId::new("7").unwrap());
        client.name = "Acme".to_string();
        client.add_country("USA");
        client.update_color(ColorKey::HeaderBand, "#111111");
        let report = client.add_report().id.clone();
        client.update_report(&report, ReportField::Name, "Coverage");

        let result = handler.handle(SaveClientCommand { client }).await.unwrap();

        assert_eq!(result.client_id.as_str(), "7");
        assert_eq!(result.redirect, Route::AdminClients);
        let sent = notifier.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].level, NotificationLevel::Success);
        assert_eq!(sent[0].message, CLIENT_SAVED_MESSAGE);
    }
}
