//! Route table and authentication gate.
//!
//! Two disjoint route sets exist. While unauthenticated only the login path
//! renders and everything else redirects to it; while authenticated the
//! management paths render, the login path redirects to the dashboard and
//! anything unknown is a not-found page. Pages therefore never check the
//! session themselves.

use crate::shared::theme::PreferenceState;
use crate::system::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Dashboard,
    AddCar,
    Cars,
    EditCar { id: String },
    AddUser,
    Users,
    Orders,
    EditOrder { id: String },
    Messages,
    Reports,
    Settings,
}

impl AppRoute {
    /// Match a location path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return path.starts_with('/').then_some(AppRoute::Dashboard);
        }
        let rest = trimmed.strip_prefix('/')?;
        let segments: Vec<&str> = rest.split('/').collect();

        let route = match segments.as_slice() {
            ["login"] => AppRoute::Login,
            ["add-car"] => AppRoute::AddCar,
            ["cars"] => AppRoute::Cars,
            ["edit-car", id] if !id.is_empty() => AppRoute::EditCar { id: id.to_string() },
            ["add-user"] => AppRoute::AddUser,
            ["users"] => AppRoute::Users,
            ["orders"] => AppRoute::Orders,
            ["edit-order", id] if !id.is_empty() => AppRoute::EditOrder { id: id.to_string() },
            ["messages"] => AppRoute::Messages,
            ["reports"] => AppRoute::Reports,
            ["settings"] => AppRoute::Settings,
            _ => return None,
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => LOGIN_PATH.to_string(),
            AppRoute::Dashboard => DASHBOARD_PATH.to_string(),
            AppRoute::AddCar => "/add-car".to_string(),
            AppRoute::Cars => "/cars".to_string(),
            AppRoute::EditCar { id } => format!("/edit-car/{}", id),
            AppRoute::AddUser => "/add-user".to_string(),
            AppRoute::Users => "/users".to_string(),
            AppRoute::Orders => "/orders".to_string(),
            AppRoute::EditOrder { id } => format!("/edit-order/{}", id),
            AppRoute::Messages => "/messages".to_string(),
            AppRoute::Reports => "/reports".to_string(),
            AppRoute::Settings => "/settings".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Login => "Sign in",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::AddCar => "Add car",
            AppRoute::Cars => "Cars",
            AppRoute::EditCar { .. } => "Edit car",
            AppRoute::AddUser => "Add user",
            AppRoute::Users => "Users",
            AppRoute::Orders => "Orders",
            AppRoute::EditOrder { .. } => "Edit order",
            AppRoute::Messages => "Messages",
            AppRoute::Reports => "Reports",
            AppRoute::Settings => "Settings",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, AppRoute::Login)
    }

    /// Entries shown in the sidebar, in display order.
    pub fn navigation() -> [AppRoute; 9] {
        [
            AppRoute::Dashboard,
            AppRoute::Cars,
            AppRoute::AddCar,
            AppRoute::Orders,
            AppRoute::Users,
            AppRoute::AddUser,
            AppRoute::Messages,
            AppRoute::Reports,
            AppRoute::Settings,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Loading,
    Unauthenticated,
    Authenticated,
}

impl GateState {
    pub fn derive(session: SessionState, preferences: PreferenceState) -> Self {
        if session.is_checking || preferences.is_loading {
            GateState::Loading
        } else if session.is_authenticated {
            GateState::Authenticated
        } else {
            GateState::Unauthenticated
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteResolution {
    Loading,
    Render(AppRoute),
    RedirectToLogin,
    RedirectToDashboard,
    NotFound,
}

pub fn resolve(gate: GateState, path: &str) -> RouteResolution {
    match gate {
        GateState::Loading => RouteResolution::Loading,
        GateState::Unauthenticated => match AppRoute::parse(path) {
            Some(route) if !route.requires_auth() => RouteResolution::Render(route),
            _ => RouteResolution::RedirectToLogin,
        },
        GateState::Authenticated => match AppRoute::parse(path) {
            Some(route) if !route.requires_auth() => RouteResolution::RedirectToDashboard,
            Some(route) => RouteResolution::Render(route),
            None => RouteResolution::NotFound,
        },
    }
}
