// SPDX-License-Identifier: MPL-2.0
//! Route resolution.
//!
//! Screens never switch screens themselves: they name a route and the
//! application asks its [`Navigator`] which screen that route shows. Routes
//! come from the `[routes]` configuration section.

use super::config::RoutesConfig;
use super::Screen;
use std::fmt;

/// Maps route strings to screens.
pub trait Navigator: fmt::Debug {
    /// Screen shown for `route`, or `None` if the route is unknown.
    fn resolve(&self, route: &str) -> Option<Screen>;

    /// Route that leads back to `screen`.
    fn route_for(&self, screen: Screen) -> &str;
}

/// [`Navigator`] backed by the configured routes.
#[derive(Debug, Clone)]
pub struct Router {
    routes: RoutesConfig,
}

impl Router {
    #[must_use]
    pub fn new(routes: RoutesConfig) -> Self {
        Self { routes }
    }

    #[must_use]
    pub fn routes(&self) -> &RoutesConfig {
        &self.routes
    }
}

/// Trims whitespace and trailing slashes; the bare root stays `/`.
fn normalize(route: &str) -> &str {
    let trimmed = route.trim();
    let without_slash = trimmed.trim_end_matches('/');
    if without_slash.is_empty() && trimmed.starts_with('/') {
        "/"
    } else {
        without_slash
    }
}

impl Navigator for Router {
    fn resolve(&self, route: &str) -> Option<Screen> {
        let route = normalize(route);
        if route.is_empty() {
            return None;
        }

        if route == normalize(&self.routes.details_route) {
            Some(Screen::Details)
        } else if route == normalize(&self.routes.create_route) {
            Some(Screen::CreateOrphanage)
        } else if route == "/" || route == normalize(&self.routes.root_route) {
            Some(Screen::Map)
        } else {
            None
        }
    }

    fn route_for(&self, screen: Screen) -> &str {
        match screen {
            Screen::Map => &self.routes.root_route,
            Screen::CreateOrphanage => &self.routes.create_route,
            Screen::Details => &self.routes.details_route,
        }
    }
}
