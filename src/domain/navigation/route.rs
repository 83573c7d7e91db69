//! Route enum - every view the portal can navigate to.

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::VisitId;

/// A resolved portal location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    AdminClients,
    AdminNewClient,
    AdminStores,
    AdminTemplates,
    AdminVisits,
    AdminSettings,
    SupervisorValidation,
    SupervisorTeam,
    AuditorVisits,
    AuditorForm(VisitId),
    AuditorHistory,
    ClientReports,
    ClientPreferences,
}

const AUDITOR_FORM_PREFIX: &str = "/auditor/form/";

static STATIC_ROUTES: Lazy<HashMap<&'static str, Route>> = Lazy::new(|| {
    [
        Route::Dashboard,
        Route::AdminClients,
        Route::AdminNewClient,
        Route::AdminStores,
        Route::AdminTemplates,
        Route::AdminVisits,
        Route::AdminSettings,
        Route::SupervisorValidation,
        Route::SupervisorTeam,
        Route::AuditorVisits,
        Route::AuditorHistory,
        Route::ClientReports,
        Route::ClientPreferences,
    ]
    .into_iter()
    .filter_map(|route| route.static_path().map(|path| (path, route)))
    .collect()
});

impl Route {
    fn static_path(&self) -> Option<&'static str> {
        let path = match self {
            Route::Dashboard => "/",
            Route::AdminClients => "/admin/clients",
            Route::AdminNewClient => "/admin/clients/new",
            Route::AdminStores => "/admin/stores",
            Route::AdminTemplates => "/admin/templates",
            Route::AdminVisits => "/admin/visits",
            Route::AdminSettings => "/admin/settings",
            Route::SupervisorValidation => "/supervisor/validate",
            Route::SupervisorTeam => "/supervisor/team",
            Route::AuditorVisits => "/auditor/visits",
            Route::AuditorForm(_) => return None,
            Route::AuditorHistory => "/auditor/history",
            Route::ClientReports => "/client/reports",
            Route::ClientPreferences => "/client/preferences",
        };
        Some(path)
    }

    /// Concrete path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::AuditorForm(visit_id) => format!("{}{}", AUDITOR_FORM_PREFIX, visit_id),
            other => other.static_path().unwrap_or("/").to_string(),
        }
    }

    /// Matches a path against the route table.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn try_parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        if let Some(route) = STATIC_ROUTES.get(path) {
            return Some(route.clone());
        }
        path.strip_prefix(AUDITOR_FORM_PREFIX)
            .filter(|rest| !rest.contains('/'))
            .and_then(|rest| VisitId::new(rest).ok())
            .map(Route::AuditorForm)
    }

    /// Like [`Route::try_parse`], but unknown paths fall back to the dashboard.
    pub fn resolve(path: &str) -> Route {
        Self::try_parse(path).unwrap_or(Route::Dashboard)
    }

    /// Heading shown for the view.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::AdminClients => "Clients",
            Route::AdminNewClient => "New Client",
            Route::AdminStores => "Store Management",
            Route::AdminTemplates => "Audit Templates",
            Route::AdminVisits => "Visit Management",
            Route::AdminSettings => "System Settings",
            Route::SupervisorValidation => "Validation Queue",
            Route::SupervisorTeam => "Team Management",
            Route::AuditorVisits => "My Visits",
            Route::AuditorForm(_) => "Audit",
            Route::AuditorHistory => "Visit History",
            Route::ClientReports => "Reports",
            Route::ClientPreferences => "Client Preferences",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}
