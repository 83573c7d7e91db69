//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - in-memory visit board
//! - `prompt` - confirmation prompts
//! - `notification` - notifier sinks
//! - `upload` - simulated upload gateway
//! - `clock` - system and fixed clocks

mod clock;
pub mod notification;
pub mod prompt;
pub mod storage;
pub mod upload;

pub use clock::{FixedClock, SystemClock};
pub use notification::{InMemoryNotifier, TracingNotifier};
pub use prompt::{AutoConfirm, ScriptedPrompt};
pub use storage::InMemoryVisitBoard;
pub use upload::SimulatedUploadGateway;
