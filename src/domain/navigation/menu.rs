//! Sidebar menus, one per role.

use serde::Serialize;

use crate::domain::foundation::UserRole;

use super::Route;

/// Icon drawn next to a sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Grid,
    Users,
    PackageSearch,
    FileText,
    Calendar,
    Settings,
    CheckCircle,
    BarChart,
}

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub icon: NavIcon,
}

impl NavItem {
    const fn new(label: &'static str, route: Route, icon: NavIcon) -> Self {
        Self { label, route, icon }
    }

    /// Whether this entry should be highlighted for the current location.
    pub fn is_active_at(&self, current: &Route) -> bool {
        &self.route == current
    }
}

static ADMIN_MENU: [NavItem; 6] = [
    NavItem::new("Dashboard", Route::Dashboard, NavIcon::Grid),
    NavItem::new("Clients", Route::AdminClients, NavIcon::Users),
    NavItem::new("Stores", Route::AdminStores, NavIcon::PackageSearch),
    NavItem::new("Templates", Route::AdminTemplates, NavIcon::FileText),
    NavItem::new("Visits", Route::AdminVisits, NavIcon::Calendar),
    NavItem::new("Settings", Route::AdminSettings, NavIcon::Settings),
];

static SUPERVISOR_MENU: [NavItem; 3] = [
    NavItem::new("Dashboard", Route::Dashboard, NavIcon::Grid),
    NavItem::new("Validation", Route::SupervisorValidation, NavIcon::CheckCircle),
    NavItem::new("Team", Route::SupervisorTeam, NavIcon::Users),
];

static AUDITOR_MENU: [NavItem; 2] = [
    NavItem::new("My Visits", Route::AuditorVisits, NavIcon::Grid),
    NavItem::new("Completed", Route::AuditorHistory, NavIcon::CheckCircle),
];

// Overview and Reports share a destination.
static CLIENT_MENU: [NavItem; 3] = [
    NavItem::new("Overview", Route::ClientReports, NavIcon::BarChart),
    NavItem::new("Reports", Route::ClientReports, NavIcon::FileText),
    NavItem::new("Preferences", Route::ClientPreferences, NavIcon::Settings),
];

/// Sidebar entries visible to a role, in display order.
pub fn menu_for(role: UserRole) -> &'static [NavItem] {
    match role {
        UserRole::Admin => &ADMIN_MENU,
        UserRole::Supervisor => &SUPERVISOR_MENU,
        UserRole::Auditor => &AUDITOR_MENU,
        UserRole::Client => &CLIENT_MENU,
    }
}
