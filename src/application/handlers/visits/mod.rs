//! Visit board handlers - activation, closing, creation and selection of cycles.

mod activate_next_visit;
mod close_cycle;
mod create_cycle;
mod get_visit_board;
mod select_cycle;

pub use activate_next_visit::{
    ActivateNextVisitCommand, ActivateNextVisitError, ActivateNextVisitHandler,
};
pub use close_cycle::{
    CloseCycleCommand, CloseCycleError, CloseCycleHandler, CloseCycleResult, CloseOutcome,
    CLOSE_CYCLE_PROMPT,
};
pub use create_cycle::{CreateCycleCommand, CreateCycleError, CreateCycleHandler, CreateCycleResult};
pub use get_visit_board::{CycleOption, GetVisitBoardHandler, SelectedCycleView, VisitBoardView};
pub use select_cycle::{SelectCycleCommand, SelectCycleError, SelectCycleHandler};
