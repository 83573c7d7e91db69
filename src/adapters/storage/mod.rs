//! Storage adapters.

mod in_memory_visit_board;

pub use in_memory_visit_board::InMemoryVisitBoard;
