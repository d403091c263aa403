//! Named page routes and navigation.
//!
//! DESIGN
//! ======
//! The route table is static. Everything under `/admin` needs a session
//! token; `admin-users` is further gated by [`is_admin_guard`]. `/admin`
//! itself redirects to the default landing view, and unknown paths resolve
//! to the not-found page.

use std::sync::{Mutex, PoisonError};

use crate::error::NavigationError;
use crate::session::Session;

pub const AUTH_ROUTE: &str = "auth";
/// Landing view after a successful login or registration.
pub const DEFAULT_LANDING: &str = "admin-feed";
pub const ADMIN_USERS_ROUTE: &str = "admin-users";
pub const NOT_FOUND_ROUTE: &str = "not-found";

const ADMIN_ROOT: &str = "/admin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Only users whose role is admin may enter.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub requires_auth: bool,
    pub guard: Option<Guard>,
}

const fn public(name: &'static str, path: &'static str) -> Route {
    Route { name, path, requires_auth: false, guard: None }
}

const fn admin(name: &'static str, path: &'static str) -> Route {
    Route { name, path, requires_auth: true, guard: None }
}

pub static ROUTES: &[Route] = &[
    public(AUTH_ROUTE, "/"),
    admin(DEFAULT_LANDING, "/admin/feed"),
    admin("admin-dashboard", "/admin/dashboard"),
    admin("admin-movement", "/admin/movimentacoes"),
    admin("admin-scheduling", "/admin/agendamentos"),
    admin("admin-account", "/admin/contas"),
    admin("admin-category", "/admin/categorias"),
    Route { name: ADMIN_USERS_ROUTE, path: "/admin/usuarios", requires_auth: true, guard: Some(Guard::Admin) },
    admin("admin-departments", "/admin/departamentos"),
    admin("admin-alert", "/admin/alertas"),
    admin("admin-financial-control", "/admin/contabilidade"),
    admin("admin-help", "/admin/ajuda"),
    NOT_FOUND,
];

const NOT_FOUND: Route = public(NOT_FOUND_ROUTE, "/*");

#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Resolve a URL path to its route. Never fails: unknown paths map to not-found.
#[must_use]
pub fn resolve_path(path: &str) -> &'static Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };

    let found = if normalized == ADMIN_ROOT {
        find_by_name(DEFAULT_LANDING)
    } else {
        ROUTES.iter().find(|r| r.path == normalized && r.name != NOT_FOUND_ROUTE)
    };
    found.unwrap_or(&NOT_FOUND)
}

/// Admin gate for `admin-users`.
#[must_use]
pub fn is_admin_guard(session: &Session) -> bool {
    session.is_admin()
}

/// Named-route navigation. Fire-and-forget from the caller's point of view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route_name: &str);
}

/// Route table bound to the session used for auth checks and guards.
#[derive(Debug)]
pub struct Router {
    session: Session,
    current: Mutex<Option<&'static Route>>,
}

impl Router {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session, current: Mutex::new(None) }
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static Route> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Navigate to a route by name.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] for unknown names, missing sessions on
    /// protected routes, and failed guards. The current route is unchanged.
    pub fn push(&self, name: &str) -> Result<&'static Route, NavigationError> {
        let route = find_by_name(name).ok_or_else(|| NavigationError::UnknownRoute(name.to_owned()))?;
        self.enter(route)
    }

    /// Navigate to whatever route `path` resolves to.
    ///
    /// # Errors
    ///
    /// Same as [`Router::push`], minus unknown routes.
    pub fn push_path(&self, path: &str) -> Result<&'static Route, NavigationError> {
        self.enter(resolve_path(path))
    }

    fn enter(&self, route: &'static Route) -> Result<&'static Route, NavigationError> {
        if route.requires_auth && !self.session.is_authenticated() {
            return Err(NavigationError::Unauthenticated(route.name));
        }
        if route.guard == Some(Guard::Admin) && !is_admin_guard(&self.session) {
            return Err(NavigationError::Forbidden(route.name));
        }
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
        tracing::info!(route = route.name, path = route.path, "navigated");
        Ok(route)
    }
}

impl Navigator for Router {
    fn navigate(&self, route_name: &str) {
        if let Err(e) = self.push(route_name) {
            tracing::warn!(route = route_name, error = %e, "navigation refused");
        }
    }
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
