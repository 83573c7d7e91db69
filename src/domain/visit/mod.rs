//! Visit module - audit cycles, virtual channels and activation.
//!
//! A Cycle is a bounded audit period. Each of its virtual channels groups
//! stores under a visit quota; administrators open visits one at a time
//! until the quota is reached, then close the cycle and start the next.

mod channel;
mod command;
mod cycle;
mod events;
mod progress;
mod store;

pub use channel::VirtualChannel;
pub use command::{ActivationOutcome, ActivationSkip, CommandOutcome, VisitCommand};
pub use cycle::Cycle;
pub use events::CycleEvent;
pub use progress::{ChannelAction, ChannelProgress};
pub use store::CycleStore;
