//! GetVisitBoardHandler - read model for the visit management screen.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{CycleId, CycleStatus, DomainError};
use crate::domain::visit::{ChannelProgress, Cycle, CycleStore};
use crate::ports::VisitBoardRepository;

/// One entry of the cycle dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleOption {
    pub cycle_id: CycleId,
    /// e.g. `Cycle 2 (closed)`
    pub label: String,
    pub selected: bool,
}

/// The cycle currently shown, with one card per channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedCycleView {
    /// The selected cycle
    pub cycle_id: CycleId,
    /// Ordinal shown in the header
    pub cycle_no: u32,
    /// Current lifecycle status
    pub status: CycleStatus,
    /// First day of the period
    pub start_date: NaiveDate,
    /// Last day of the period, if fixed
    pub end_date: Option<NaiveDate>,
    /// Whether the "Close Cycle" button is offered
    pub can_close: bool,
    /// One card per virtual channel, in cycle order
    pub channels: Vec<ChannelProgress>,
}

impl SelectedCycleView {
    fn of(cycle: &Cycle) -> Self {
        Self {
            cycle_id: cycle.id().clone(),
            cycle_no: cycle.cycle_no(),
            status: cycle.status(),
            start_date: cycle.start_date(),
            end_date: cycle.end_date(),
            can_close: cycle.can_close(),
            channels: ChannelProgress::for_cycle(cycle),
        }
    }
}

/// Everything the visit management screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitBoardView {
    /// Dropdown entries in creation order
    pub cycle_options: Vec<CycleOption>,
    /// `None` when the store is empty
    pub selected: Option<SelectedCycleView>,
}

impl VisitBoardView {
    pub fn of(store: &CycleStore) -> Self {
        let selected_id = store.selected_id();
        Self {
            cycle_options: store
                .cycles()
                .iter()
                .map(|c| CycleOption {
                    cycle_id: c.id().clone(),
                    label: c.label(),
                    selected: Some(c.id()) == selected_id,
                })
                .collect(),
            selected: store.selected().map(SelectedCycleView::of),
        }
    }
}

/// Handler for reading the visit board.
pub struct GetVisitBoardHandler {
    board: Arc<dyn VisitBoardRepository>,
}

impl GetVisitBoardHandler {
    pub fn new(board: Arc<dyn VisitBoardRepository>) -> Self {
        Self { board }
    }

    pub async fn handle(&self) -> Result<VisitBoardView, DomainError> {
        let store = self.board.snapshot().await?;
        Ok(VisitBoardView::of(&store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::visits::test_support::seeded_board;
    use crate::domain::foundation::ChannelId;
    use crate::domain::visit::{ChannelAction, VirtualChannel};

    fn store_with(status: CycleStatus) -> CycleStore {
        let cycle = Cycle::restore(
            CycleId::new("c1").unwrap(),
            1,
            "2024-04-01".parse().unwrap(),
            None,
            status,
            vec![VirtualChannel::new(ChannelId::new("vc1").unwrap(), "A", 2).unwrap()],
        )
        .unwrap();
        CycleStore::from_cycles(vec![cycle]).unwrap()
    }

    #[tokio::test]
    async fn seeded_board_view() {
        let view = GetVisitBoardHandler::new(Arc::new(seeded_board()))
            .handle()
            .await
            .unwrap();

        assert_eq!(view.cycle_options.len(), 1);
        assert_eq!(view.cycle_options[0].label, "Cycle 1 (active)");
        assert!(view.cycle_options[0].selected);

        let selected = view.selected.unwrap();
        assert!(selected.can_close);
        let actions: Vec<_> = selected.channels.iter().map(|c| c.action).collect();
        assert_eq!(
            actions,
            vec![
                ChannelAction::OpenVisit { visit_number: 2 },
                ChannelAction::OpenVisit { visit_number: 1 },
                ChannelAction::AllVisitsCompleted,
            ]
        );
    }

    #[test]
    fn empty_store_has_no_selection() {
        let view = VisitBoardView::of(&CycleStore::new());
        assert!(view.cycle_options.is_empty());
        assert!(view.selected.is_none());
    }

    #[test]
    fn upcoming_cycle_offers_close() {
        let view = VisitBoardView::of(&store_with(CycleStatus::Upcoming));
        let selected = view.selected.unwrap();
        assert!(selected.can_close);
        assert_eq!(selected.channels[0].action, ChannelAction::CycleUpcoming);
    }

    #[test]
    fn closed_cycle_hides_close() {
        let view = VisitBoardView::of(&store_with(CycleStatus::Closed));
        assert!(!view.selected.unwrap().can_close);
    }
}
