//! Navigation module - routes, role menus and the session role context.

mod menu;
mod role_context;
mod route;

pub use menu::{menu_for, NavIcon, NavItem};
pub use role_context::{RoleContext, User};
pub use route::Route;
