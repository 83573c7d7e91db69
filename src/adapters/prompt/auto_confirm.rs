//! Prompt that answers every question the same way.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::ConfirmationPrompt;

/// Fixed answer, used when confirmation is switched off or for dry runs.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm {
    answer: bool,
}

impl AutoConfirm {
    pub fn approve() -> Self {
        Self { answer: true }
    }

    pub fn decline() -> Self {
        Self { answer: false }
    }
}

impl Default for AutoConfirm {
    fn default() -> Self {
        Self::approve()
    }
}

#[async_trait]
impl ConfirmationPrompt for AutoConfirm {
    async fn confirm(&self, message: &str) -> Result<bool, DomainError> {
        tracing::debug!(prompt = message, answer = self.answer, "Auto-answering confirmation");
        Ok(self.answer)
    }
}
