//! In-memory notifier for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::{Notification, Notifier};

/// Captures notifications for assertions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    sent: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<Notification> {
        self.sent.read().await.clone()
    }

    /// Messages only, in send order.
    pub async fn messages(&self) -> Vec<String> {
        self.sent
            .read()
            .await
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), DomainError> {
        self.sent.write().await.push(notification);
        Ok(())
    }
}
