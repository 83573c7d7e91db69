//! GetDashboardHandler - the landing view for the active role.
//!
//! Admins land on the visit board; auditors on their visit list. Every
//! role gets the portal chrome (title, greeting, menu).

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::application::handlers::visits::VisitBoardView;
use crate::domain::catalog::{Catalog, VisitFilter, VisitStatus};
use crate::domain::foundation::{DomainError, UserRole, VisitId};
use crate::domain::navigation::{NavItem, RoleContext, Route, User};
use crate::ports::VisitBoardRepository;

/// One row of the auditor's visit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitSummary {
    pub visit_id: VisitId,
    pub store_name: String,
    pub date: NaiveDate,
    pub status: VisitStatus,
    pub visit_number: u32,
    /// Where "Start Audit" leads.
    pub form: Route,
}

/// Landing page for the active role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// e.g. `Admin Portal`
    pub portal_title: String,
    pub greeting: String,
    pub user: User,
    /// Current route, highlighted in the menu.
    pub location: Route,
    /// Sidebar entries for the role.
    pub menu: &'static [NavItem],
    /// Admin only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_board: Option<VisitBoardView>,
    /// Auditor only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits: Option<Vec<VisitSummary>>,
}

/// Handler for the landing dashboard.
pub struct GetDashboardHandler {
    board: Arc<dyn VisitBoardRepository>,
    catalog: Arc<Catalog>,
}

impl GetDashboardHandler {
    pub fn new(board: Arc<dyn VisitBoardRepository>, catalog: Arc<Catalog>) -> Self {
        Self { board, catalog }
    }

    pub async fn handle(
        &self,
        ctx: &RoleContext,
        filter: VisitFilter,
    ) -> Result<DashboardView, DomainError> {
        let visit_board = match ctx.role() {
            UserRole::Admin => Some(VisitBoardView::of(&self.board.snapshot().await?)),
            _ => None,
        };
        let visits = match ctx.role() {
            UserRole::Auditor => Some(self.visit_summaries(filter)),
            _ => None,
        };

        Ok(DashboardView {
            portal_title: ctx.portal_title(),
            greeting: ctx.greeting(),
            user: ctx.user().clone(),
            location: ctx.location().clone(),
            menu: ctx.menu(),
            visit_board,
            visits,
        })
    }

    fn visit_summaries(&self, filter: VisitFilter) -> Vec<VisitSummary> {
        self.catalog
            .visits_matching(filter)
            .into_iter()
            .map(|visit| VisitSummary {
                visit_id: visit.id.clone(),
                store_name: self
                    .catalog
                    .store_name(&visit.store_id)
                    .unwrap_or("Unknown Store")
                    .to_string(),
                date: visit.date,
                status: visit.status,
                visit_number: visit.visit_number,
                form: Route::AuditorForm(visit.id.clone()),
            })
            .collect()
    }
}
