//! Lifecycle transitions for status enums.

use super::ValidationError;

/// A status enum with a fixed transition table.
///
/// ```ignore
/// let next = CycleStatus::Active.transition_to(CycleStatus::Closed)?;
/// assert!(next.is_terminal());
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    fn can_transition_to(&self, target: &Self) -> bool;

    /// States reachable in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns `target` if the move is allowed.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if !self.can_transition_to(&target) {
            return Err(ValidationError::invalid_format(
                "status",
                format!("{:?} cannot move to {:?}", self, target),
            ));
        }
        Ok(target)
    }

    /// No outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Gate {
        Shut,
        Open,
        Sealed,
    }

    impl StateMachine for Gate {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Gate::Shut => vec![Gate::Open, Gate::Sealed],
                Gate::Open => vec![Gate::Shut],
                Gate::Sealed => vec![],
            }
        }
    }

    #[test]
    fn allowed_move_returns_target() {
        assert_eq!(Gate::Shut.transition_to(Gate::Open), Ok(Gate::Open));
    }

    #[test]
    fn forbidden_move_names_both_states() {
        let err = Gate::Open.transition_to(Gate::Sealed).unwrap_err();
        assert!(err.to_string().contains("Open cannot move to Sealed"));
    }

    #[test]
    fn sealed_is_terminal() {
        assert!(Gate::Sealed.is_terminal());
        assert!(!Gate::Open.is_terminal());
    }
}
