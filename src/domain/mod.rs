//! Domain layer - pure types and rules, no I/O.

pub mod audit;
pub mod catalog;
pub mod foundation;
pub mod navigation;
pub mod visit;
