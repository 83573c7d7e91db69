//! CycleStore - the visit-management state machine.
//!
//! Holds the ordered cycles plus the currently selected cycle and exposes
//! the three transitions administrators drive from the visit screen:
//! activating the next visit of a channel, closing a cycle, and creating a
//! follow-up cycle. All three are total: a request that does not apply
//! leaves the store untouched instead of failing.

use chrono::{NaiveDate, Utc};

use crate::domain::foundation::{
    ChannelId, CycleId, DomainError, ErrorCode, ValidationError,
};

use super::{
    ActivationOutcome, ActivationSkip, ChannelProgress, CommandOutcome, Cycle, CycleEvent,
    VisitCommand,
};

/// Session-scoped collection of audit cycles.
#[derive(Debug, Clone, Default)]
pub struct CycleStore {
    cycles: Vec<Cycle>,
    selected: Option<CycleId>,
    domain_events: Vec<CycleEvent>,
}

impl CycleStore {
    /// Creates an empty store with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing cycles, selecting the first one.
    pub fn from_cycles(cycles: Vec<Cycle>) -> Result<Self, DomainError> {
        for (i, cycle) in cycles.iter().enumerate() {
            if cycles[..i].iter().any(|c| c.id() == cycle.id()) {
                return Err(ValidationError::invalid_format(
                    "cycles",
                    format!("duplicate cycle id '{}'", cycle.id()),
                )
                .into());
            }
        }
        let selected = cycles.first().map(|c| c.id().clone());
        Ok(Self {
            cycles,
            selected,
            domain_events: Vec::new(),
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    /// All cycles in creation order.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Id of the cycle the board acts on.
    pub fn selected_id(&self) -> Option<&CycleId> {
        self.selected.as_ref()
    }

    /// The currently selected cycle, if any.
    pub fn selected(&self) -> Option<&Cycle> {
        self.selected.as_ref().and_then(|id| self.cycle(id))
    }

    /// Looks up a cycle by id.
    pub fn cycle(&self, id: &CycleId) -> Option<&Cycle> {
        self.cycles.iter().find(|c| c.id() == id)
    }

    /// Progress of every channel in the selected cycle.
    pub fn selected_progress(&self) -> Vec<ChannelProgress> {
        self.selected()
            .map(ChannelProgress::for_cycle)
            .unwrap_or_default()
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<CycleEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ───────────────────────────────────────────────────────────────
    // Transitions
    // ───────────────────────────────────────────────────────────────

    /// Switches the selected cycle.
    ///
    /// # Errors
    ///
    /// - `CycleNotFound` if no cycle has that id
    pub fn select_cycle(&mut self, cycle_id: &CycleId) -> Result<(), DomainError> {
        if self.cycle(cycle_id).is_none() {
            return Err(
                DomainError::new(ErrorCode::CycleNotFound, "Cycle not found")
                    .with_detail("cycle_id", cycle_id.as_str()),
            );
        }
        self.selected = Some(cycle_id.clone());
        Ok(())
    }

    /// Opens the next visit of a channel in the selected cycle.
    ///
    /// No-op unless the selected cycle is active, owns the channel, and the
    /// channel still has visits left to open.
    pub fn activate_next_visit(&mut self, channel_id: &ChannelId) -> ActivationOutcome {
        let skip = |reason| ActivationOutcome::Skipped { reason };

        let Some(selected) = self.selected.clone() else {
            return skip(ActivationSkip::NoCycleSelected);
        };
        let Some(cycle) = self.cycles.iter_mut().find(|c| *c.id() == selected) else {
            return skip(ActivationSkip::NoCycleSelected);
        };
        if !cycle.status().is_mutable() {
            return skip(ActivationSkip::CycleNotActive(cycle.status()));
        }
        if cycle.channel(channel_id).is_none() {
            return skip(ActivationSkip::UnknownChannel);
        }

        match cycle.activate_next_visit(channel_id) {
            Some(visit_number) => {
                self.domain_events.push(CycleEvent::VisitActivated {
                    cycle_id: selected.clone(),
                    channel_id: channel_id.clone(),
                    visit_number,
                });
                ActivationOutcome::Activated {
                    cycle_id: selected,
                    channel_id: channel_id.clone(),
                    visit_number,
                }
            }
            None => skip(ActivationSkip::AllVisitsActivated),
        }
    }

    /// Closes a cycle. Terminal and idempotent; unknown ids are ignored.
    ///
    /// Returns true when the status actually changed.
    pub fn close_cycle(&mut self, cycle_id: &CycleId) -> bool {
        let changed = self
            .cycles
            .iter_mut()
            .find(|c| c.id() == cycle_id)
            .map(Cycle::close)
            .unwrap_or(false);

        if changed {
            self.domain_events.push(CycleEvent::Closed {
                cycle_id: cycle_id.clone(),
            });
        }
        changed
    }

    /// Appends a new active cycle starting today (UTC).
    ///
    /// See [`CycleStore::create_cycle_on`].
    pub fn create_cycle(&mut self, from_cycle_id: Option<&CycleId>) -> CycleId {
        self.create_cycle_on(from_cycle_id, Utc::now().date_naive())
    }

    /// Appends a new active cycle cloned from the selected one.
    pub fn create_cycle_from_selected(&mut self) -> CycleId {
        let from = self.selected.clone();
        self.create_cycle(from.as_ref())
    }

    /// Appends a new active cycle starting on `start_date` and selects it.
    ///
    /// Channel names and quotas are copied from `from_cycle_id` with all
    /// progress reset; a missing source yields a cycle without channels.
    pub fn create_cycle_on(
        &mut self,
        from_cycle_id: Option<&CycleId>,
        start_date: NaiveDate,
    ) -> CycleId {
        let source = from_cycle_id.and_then(|id| self.cycle(id));
        let channels = source.map(Cycle::reset_channels).unwrap_or_default();
        let cloned_from = source.map(|c| c.id().clone());

        let id = self.fresh_cycle_id();
        let cycle_no = self.cycles.len() as u32 + 1;
        let cycle = Cycle::follow_up(id.clone(), cycle_no, start_date, channels);

        self.cycles.push(cycle);
        self.selected = Some(id.clone());
        self.domain_events.push(CycleEvent::Created {
            cycle_id: id.clone(),
            cycle_no,
            cloned_from,
            start_date,
        });
        id
    }

    /// Applies a command as one indivisible step.
    ///
    /// # Errors
    ///
    /// Only `SelectCycle` can fail (unknown cycle).
    pub fn apply(&mut self, command: VisitCommand) -> Result<CommandOutcome, DomainError> {
        let outcome = match command {
            VisitCommand::ActivateNextVisit { channel_id } => {
                CommandOutcome::Activation(self.activate_next_visit(&channel_id))
            }
            VisitCommand::CloseCycle { cycle_id } => {
                let changed = self.close_cycle(&cycle_id);
                CommandOutcome::Closed { cycle_id, changed }
            }
            VisitCommand::CreateCycle {
                from_cycle_id,
                start_date,
            } => {
                let cycle_id = self.create_cycle_on(from_cycle_id.as_ref(), start_date);
                let cycle_no = self.cycles.len() as u32;
                CommandOutcome::Created { cycle_id, cycle_no }
            }
            VisitCommand::SelectCycle { cycle_id } => {
                self.select_cycle(&cycle_id)?;
                CommandOutcome::Selected { cycle_id }
            }
        };
        Ok(outcome)
    }

    fn fresh_cycle_id(&self) -> CycleId {
        loop {
            let id = CycleId::generate();
            if self.cycle(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ChannelStatus, CycleStatus};
    use crate::domain::visit::VirtualChannel;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn cid(s: &str) -> CycleId {
        CycleId::new(s).unwrap()
    }

    fn vid(s: &str) -> ChannelId {
        ChannelId::new(s).unwrap()
    }

    fn vc(id: &str, name: &str, required: u32, activated: u32) -> VirtualChannel {
        VirtualChannel::restore(vid(id), name, required, activated).unwrap()
    }

    /// Cycle c1 (active) with channels A(2,1), B(1,0), C(1,1).
    fn seeded_store() -> CycleStore {
        let c1 = Cycle::restore(
            cid("c1"),
            1,
            date("2024-01-01"),
            Some(date("2024-03-31")),
            CycleStatus::Active,
            vec![vc("vc1", "A", 2, 1), vc("vc2", "B", 1, 0), vc("vc3", "C", 1, 1)],
        )
        .unwrap();
        CycleStore::from_cycles(vec![c1]).unwrap()
    }

    fn channel<'a>(store: &'a CycleStore, cycle: &str, channel: &str) -> &'a VirtualChannel {
        store.cycle(&cid(cycle)).unwrap().channel(&vid(channel)).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Construction
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn from_cycles_selects_first_cycle() {
        let store = seeded_store();
        assert_eq!(store.selected_id(), Some(&cid("c1")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn from_cycles_rejects_duplicate_ids() {
        let c = Cycle::open(cid("c1"), 1, date("2024-01-01"), vec![]).unwrap();
        let result = CycleStore::from_cycles(vec![c.clone(), c]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_store_has_no_selection() {
        let store = CycleStore::new();
        assert!(store.is_empty());
        assert!(store.selected().is_none());
        assert!(store.selected_progress().is_empty());
    }

    // ───────────────────────────────────────────────────────────────
    // activate_next_visit
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn activating_inactive_channel_opens_first_visit() {
        let mut store = seeded_store();

        let outcome = store.activate_next_visit(&vid("vc2"));

        assert_eq!(
            outcome,
            ActivationOutcome::Activated {
                cycle_id: cid("c1"),
                channel_id: vid("vc2"),
                visit_number: 1,
            }
        );
        let vc2 = channel(&store, "c1", "vc2");
        assert_eq!(vc2.activated_visit_count(), 1);
        assert_eq!(vc2.status(), ChannelStatus::Active);
    }

    #[test]
    fn activating_full_channel_is_noop() {
        let mut store = seeded_store();
        store.activate_next_visit(&vid("vc2"));
        store.take_events();
        let before = store.cycles().to_vec();

        let outcome = store.activate_next_visit(&vid("vc2"));

        assert_eq!(
            outcome,
            ActivationOutcome::Skipped {
                reason: ActivationSkip::AllVisitsActivated
            }
        );
        assert_eq!(store.cycles(), before.as_slice());
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn activating_unknown_channel_is_noop() {
        let mut store = seeded_store();
        let before = store.cycles().to_vec();
        let outcome = store.activate_next_visit(&vid("vc42"));
        assert!(!outcome.is_activated());
        assert_eq!(store.cycles(), before.as_slice());
    }

    #[test]
    fn activating_without_selection_is_noop() {
        let mut store = CycleStore::new();
        assert_eq!(
            store.activate_next_visit(&vid("vc1")),
            ActivationOutcome::Skipped {
                reason: ActivationSkip::NoCycleSelected
            }
        );
    }

    #[test]
    fn activation_records_event() {
        let mut store = seeded_store();
        store.activate_next_visit(&vid("vc1"));
        let events = store.take_events();
        assert_eq!(
            events,
            vec![CycleEvent::VisitActivated {
                cycle_id: cid("c1"),
                channel_id: vid("vc1"),
                visit_number: 2,
            }]
        );
    }

    // ───────────────────────────────────────────────────────────────
    // close_cycle
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn close_cycle_freezes_channels() {
        let mut store = seeded_store();

        assert!(store.close_cycle(&cid("c1")));
        assert_eq!(store.selected().unwrap().status(), CycleStatus::Closed);

        let before = store.cycles().to_vec();
        let outcome = store.activate_next_visit(&vid("vc1"));

        assert_eq!(
            outcome,
            ActivationOutcome::Skipped {
                reason: ActivationSkip::CycleNotActive(CycleStatus::Closed)
            }
        );
        assert_eq!(store.cycles(), before.as_slice());
        assert_eq!(channel(&store, "c1", "vc1").activated_visit_count(), 1);
    }

    #[test]
    fn close_cycle_is_idempotent() {
        let mut once = seeded_store();
        once.close_cycle(&cid("c1"));

        let mut twice = seeded_store();
        twice.close_cycle(&cid("c1"));
        assert!(!twice.close_cycle(&cid("c1")));

        assert_eq!(once.cycles(), twice.cycles());
        assert_eq!(twice.take_events().len(), 1);
    }

    #[test]
    fn close_unknown_cycle_is_noop() {
        let mut store = seeded_store();
        assert!(!store.close_cycle(&cid("c404")));
        assert_eq!(store.selected().unwrap().status(), CycleStatus::Active);
    }

    // ───────────────────────────────────────────────────────────────
    // create_cycle
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn create_cycle_clones_shape_and_resets_progress() {
        let mut store = seeded_store();
        store.close_cycle(&cid("c1"));

        let new_id = store.create_cycle_on(Some(&cid("c1")), date("2024-04-01"));

        let c2 = store.cycle(&new_id).unwrap();
        assert_eq!(c2.cycle_no(), 2);
        assert_eq!(c2.status(), CycleStatus::Active);
        assert_eq!(c2.start_date(), date("2024-04-01"));
        assert_eq!(c2.end_date(), None);

        let shape: Vec<_> = c2
            .virtual_channels()
            .iter()
            .map(|vc| {
                (
                    vc.name().to_string(),
                    vc.required_visits(),
                    vc.activated_visit_count(),
                    vc.status(),
                )
            })
            .collect();
        assert_eq!(
            shape,
            vec![
                ("A".to_string(), 2, 0, ChannelStatus::Inactive),
                ("B".to_string(), 1, 0, ChannelStatus::Inactive),
                ("C".to_string(), 1, 0, ChannelStatus::Inactive),
            ]
        );
    }

    #[test]
    fn create_cycle_selects_new_cycle_and_leaves_source_untouched() {
        let mut store = seeded_store();
        let new_id = store.create_cycle(Some(&cid("c1")));

        assert_eq!(store.selected_id(), Some(&new_id));
        assert_ne!(new_id, cid("c1"));
        assert_eq!(channel(&store, "c1", "vc1").activated_visit_count(), 1);
    }

    #[test]
    fn activation_after_create_targets_new_cycle() {
        let mut store = seeded_store();
        let new_id = store.create_cycle_from_selected();

        store.activate_next_visit(&vid("vc1"));

        let fresh = store.cycle(&new_id).unwrap().channel(&vid("vc1")).unwrap();
        assert_eq!(fresh.activated_visit_count(), 1);
        assert_eq!(channel(&store, "c1", "vc1").activated_visit_count(), 1);
    }

    #[test]
    fn create_cycle_on_empty_store_has_no_channels() {
        let mut store = CycleStore::new();
        let id = store.create_cycle(None);

        let cycle = store.cycle(&id).unwrap();
        assert_eq!(cycle.cycle_no(), 1);
        assert!(cycle.virtual_channels().is_empty());
        assert_eq!(store.selected_id(), Some(&id));
    }

    #[test]
    fn create_cycle_from_unknown_source_has_no_channels() {
        let mut store = seeded_store();
        let id = store.create_cycle(Some(&cid("nope")));
        assert!(store.cycle(&id).unwrap().virtual_channels().is_empty());
        assert_eq!(store.cycle(&id).unwrap().cycle_no(), 2);
    }

    #[test]
    fn create_cycle_records_event() {
        let mut store = seeded_store();
        let id = store.create_cycle_on(Some(&cid("c1")), date("2024-04-01"));
        assert_eq!(
            store.take_events(),
            vec![CycleEvent::Created {
                cycle_id: id,
                cycle_no: 2,
                cloned_from: Some(cid("c1")),
                start_date: date("2024-04-01"),
            }]
        );
    }

    // ───────────────────────────────────────────────────────────────
    // select_cycle / apply
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn select_cycle_switches_activation_target() {
        let mut store = seeded_store();
        store.create_cycle(Some(&cid("c1")));
        store.select_cycle(&cid("c1")).unwrap();

        store.activate_next_visit(&vid("vc2"));
        assert_eq!(channel(&store, "c1", "vc2").activated_visit_count(), 1);
    }

    #[test]
    fn select_unknown_cycle_fails() {
        let mut store = seeded_store();
        let err = store.select_cycle(&cid("c9")).unwrap_err();
        assert_eq!(err.code, ErrorCode::CycleNotFound);
        assert_eq!(store.selected_id(), Some(&cid("c1")));
    }

    #[test]
    fn apply_dispatches_each_command() {
        let mut store = seeded_store();

        let activated = store
            .apply(VisitCommand::ActivateNextVisit {
                channel_id: vid("vc2"),
            })
            .unwrap();
        assert!(matches!(
            activated,
            CommandOutcome::Activation(ActivationOutcome::Activated { visit_number: 1, .. })
        ));

        let closed = store
            .apply(VisitCommand::CloseCycle {
                cycle_id: cid("c1"),
            })
            .unwrap();
        assert_eq!(
            closed,
            CommandOutcome::Closed {
                cycle_id: cid("c1"),
                changed: true
            }
        );

        let created = store
            .apply(VisitCommand::CreateCycle {
                from_cycle_id: Some(cid("c1")),
                start_date: date("2024-04-01"),
            })
            .unwrap();
        assert!(matches!(created, CommandOutcome::Created { cycle_no: 2, .. }));

        let selected = store
            .apply(VisitCommand::SelectCycle {
                cycle_id: cid("c1"),
            })
            .unwrap();
        assert_eq!(selected, CommandOutcome::Selected { cycle_id: cid("c1") });
    }

    // ───────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────

    #[derive(Debug, Clone)]
    enum Op {
        Activate(usize),
        Close,
        Create,
        Select(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0usize..4).prop_map(Op::Activate),
            1 => Just(Op::Close),
            1 => Just(Op::Create),
            1 => (0usize..8).prop_map(Op::Select),
        ]
    }

    const CHANNELS: [&str; 4] = ["vc1", "vc2", "vc3", "vc9"];

    proptest! {
        #[test]
        fn counts_stay_within_quota_and_closed_cycles_never_change(
            ops in proptest::collection::vec(op_strategy(), 0..60)
        ) {
            let mut store = seeded_store();
            let mut frozen: Vec<Cycle> = Vec::new();

            for op in ops {
                let before = store.cycles().to_vec();
                match op {
                    Op::Activate(i) => {
                        store.activate_next_visit(&vid(CHANNELS[i]));
                    }
                    Op::Close => {
                        if let Some(id) = store.selected_id().cloned() {
                            store.close_cycle(&id);
                        }
                    }
                    Op::Create => {
                        let prior = store.len();
                        let id = store.create_cycle_from_selected();
                        let created = store.cycle(&id).unwrap();
                        prop_assert_eq!(created.cycle_no() as usize, prior + 1);
                        prop_assert!(created
                            .virtual_channels()
                            .iter()
                            .all(|vc| vc.activated_visit_count() == 0
                                && vc.status() == ChannelStatus::Inactive));
                    }
                    Op::Select(i) => {
                        if let Some(id) = before.get(i).map(|c| c.id().clone()) {
                            store.select_cycle(&id).unwrap();
                        }
                    }
                }

                for cycle in store.cycles() {
                    for vc in cycle.virtual_channels() {
                        prop_assert!(vc.activated_visit_count() <= vc.required_visits());
                        prop_assert_eq!(
                            vc.status(),
                            ChannelStatus::from_activated_count(vc.activated_visit_count())
                        );
                    }
                }

                // counts never decrease
                for (old, new) in before.iter().zip(store.cycles()) {
                    for (a, b) in old.virtual_channels().iter().zip(new.virtual_channels()) {
                        prop_assert!(b.activated_visit_count() >= a.activated_visit_count());
                    }
                }

                for closed in &frozen {
                    prop_assert_eq!(store.cycle(closed.id()), Some(closed));
                }
                frozen = store
                    .cycles()
                    .iter()
                    .filter(|c| c.status().is_closed())
                    .cloned()
                    .collect();
            }
        }
    }
}
