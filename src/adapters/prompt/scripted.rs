//! Prompt replaying a queue of answers, recording each question.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ConfirmationPrompt;

#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: Arc<Mutex<VecDeque<bool>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().collect())),
            asked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Questions asked so far.
    pub async fn asked(&self) -> Vec<String> {
        self.asked.lock().await.clone()
    }
}

#[async_trait]
impl ConfirmationPrompt for ScriptedPrompt {
    async fn confirm(&self, message: &str) -> Result<bool, DomainError> {
        self.asked.lock().await.push(message.to_string());
        self.answers.lock().await.pop_front().ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "No scripted answer left")
                .with_detail("prompt", message)
        })
    }
}
