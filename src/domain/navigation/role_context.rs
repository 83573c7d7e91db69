//! Session role and user, plus the portal chrome derived from them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, UserRole};

use super::{menu_for, NavItem, Route};

/// The signed-in user as the portal sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Active role, user and location for one portal session.
///
/// `user.role` always equals the active role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleContext {
    user: User,
    location: Route,
}

impl RoleContext {
    pub fn new(user: User) -> Self {
        Self {
            user,
            location: Route::Dashboard,
        }
    }

    /// Demo session: an admin named "Demo User".
    pub fn demo() -> Self {
        Self::new(User {
            id: UserId::from_static("1"),
            name: "Demo User".to_string(),
            email: "demo@fieldforce.com".to_string(),
            role: UserRole::Admin,
        })
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn location(&self) -> &Route {
        &self.location
    }

    /// Switches the active role.
    pub fn set_role(&mut self, role: UserRole) {
        if self.user.role != role {
            tracing::debug!(from = %self.user.role, to = %role, "Switching role");
        }
        self.user.role = role;
    }

    /// Moves to a path; unknown paths land on the dashboard.
    pub fn navigate(&mut self, path: &str) -> &Route {
        self.location = Route::resolve(path);
        &self.location
    }

    pub fn menu(&self) -> &'static [NavItem] {
        menu_for(self.user.role)
    }

    /// Header title, e.g. "Admin Portal".
    pub fn portal_title(&self) -> String {
        format!("{} Portal", self.user.role.label())
    }

    /// Dashboard greeting, e.g. "Welcome back, Admin".
    pub fn greeting(&self) -> String {
        format!("Welcome back, {}", self.user.role.label())
    }

    /// Whether `route` is the current location.
    pub fn is_active(&self, route: &Route) -> bool {
        &self.location == route
    }
}

impl Default for RoleContext {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_session_starts_as_admin_on_dashboard() {
        let ctx = RoleContext::demo();
        assert_eq!(ctx.role(), UserRole::Admin);
        assert_eq!(ctx.user().name, "Demo User");
        assert_eq!(ctx.user().email, "demo@fieldforce.com");
        assert_eq!(ctx.location(), &Route::Dashboard);
    }

    #[test]
    fn set_role_keeps_user_in_sync() {
        let mut ctx = RoleContext::demo();
        for role in UserRole::ALL {
            ctx.set_role(role);
            assert_eq!(ctx.role(), role);
            assert_eq!(ctx.user().role, role);
        }
    }

    #[test]
    fn titles_follow_role() {
        let mut ctx = RoleContext::demo();
        assert_eq!(ctx.portal_title(), "Admin Portal");
        assert_eq!(ctx.greeting(), "Welcome back, Admin");

        ctx.set_role(UserRole::Supervisor);
        assert_eq!(ctx.portal_title(), "Supervisor Portal");
        assert_eq!(ctx.greeting(), "Welcome back, Supervisor");
    }

    #[test]
    fn menu_switches_with_role() {
        let mut ctx = RoleContext::demo();
        assert_eq!(ctx.menu().len(), 6);
        ctx.set_role(UserRole::Auditor);
        assert_eq!(ctx.menu()[0].label, "My Visits");
    }

    #[test]
    fn navigation_marks_matching_entry_active() {
        let mut ctx = RoleContext::demo();
        ctx.navigate("/admin/visits");
        let active: Vec<_> = ctx
            .menu()
            .iter()
            .filter(|item| ctx.is_active(&item.route))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Visits"]);
    }

    #[test]
    fn unknown_location_falls_back_to_dashboard() {
        let mut ctx = RoleContext::demo();
        assert_eq!(ctx.navigate("/does/not/exist"), &Route::Dashboard);
    }
}
