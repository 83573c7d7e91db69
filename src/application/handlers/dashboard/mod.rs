//! Dashboard handlers.

mod get_dashboard;

pub use get_dashboard::{DashboardView, GetDashboardHandler, VisitSummary};
