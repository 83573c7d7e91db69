//! In-Memory Visit Board Adapter
//!
//! Holds the session's cycle store and its event journal behind one async
//! mutex. Each command is applied and journaled while the lock is held, so
//! activations and closes never interleave and the journal records them in
//! the order they took effect.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::DomainError;
use crate::domain::visit::{CommandOutcome, CycleEvent, CycleStore, VisitCommand};
use crate::ports::VisitBoardRepository;

#[derive(Debug)]
struct BoardState {
    store: CycleStore,
    /// Drained store events, oldest first.
    journal: Vec<CycleEvent>,
}

/// In-memory visit board for one portal session.
#[derive(Debug, Clone)]
pub struct InMemoryVisitBoard {
    state: Arc<Mutex<BoardState>>,
}

impl InMemoryVisitBoard {
    pub fn new(store: CycleStore) -> Self {
        Self {
            state: Arc::new(Mutex::new(BoardState {
                store,
                journal: Vec::new(),
            })),
        }
    }

    /// Every event recorded since the board was created, oldest first.
    pub async fn journal(&self) -> Vec<CycleEvent> {
        self.state.lock().await.journal.clone()
    }
}

impl Default for InMemoryVisitBoard {
    fn default() -> Self {
        Self::new(CycleStore::new())
    }
}

#[async_trait]
impl VisitBoardRepository for InMemoryVisitBoard {
    async fn snapshot(&self) -> Result<CycleStore, DomainError> {
        Ok(self.state.lock().await.store.clone())
    }

    async fn apply(&self, command: VisitCommand) -> Result<CommandOutcome, DomainError> {
        let mut state = self.state.lock().await;
        let outcome = state.store.apply(command)?;
        let events = state.store.take_events();

        for event in &events {
            tracing::info!(cycle_id = %event.cycle_id(), event = ?event, "Visit board changed");
        }
        state.journal.extend(events);
        Ok(outcome)
    }
}
