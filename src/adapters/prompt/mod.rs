//! Confirmation prompt adapters.

mod auto_confirm;
mod scripted;

pub use auto_confirm::AutoConfirm;
pub use scripted::ScriptedPrompt;
