//! Client-side routes and the router collaborator

/// Routes reachable in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    Home,
    #[default]
    Login,
    Register,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Log in",
            Self::Register => "Register",
        }
    }
}

/// Moves the user between routes
#[cfg_attr(test, mockall::automock)]
pub trait Router {
    fn navigate(&mut self, route: Route);
}

/// A navigation the host has not applied yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Route,
    pub to: Route,
}

/// Router backing the TUI views
#[derive(Debug, Default)]
pub struct Navigator {
    current: Route,
    /// Navigations recorded since the app last consumed them
    pending: Vec<Transition>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            pending: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Take every navigation since the last call, oldest first
    pub fn take_transitions(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.pending)
    }
}

impl Router for Navigator {
    fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigating {} -> {}", self.current.path(), route.path());
        self.pending.push(Transition {
            from: self.current,
            to: route,
        });
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Home, Route::Login, Route::Register] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/admin"), None);
    }

    #[test]
    fn test_default_route_is_login() {
        assert_eq!(Navigator::default().current(), Route::Login);
    }

    #[test]
    fn test_navigate_records_transition() {
        let mut navigator = Navigator::new(Route::Login);
        assert!(navigator.take_transitions().is_empty());

        navigator.navigate(Route::Home);
        assert_eq!(navigator.current(), Route::Home);
        assert_eq!(
            navigator.take_transitions(),
            vec![Transition {
                from: Route::Login,
                to: Route::Home
            }]
        );
        assert!(navigator.take_transitions().is_empty());
    }

    #[test]
    fn test_navigating_to_current_route_still_transitions() {
        let mut navigator = Navigator::new(Route::Login);
        navigator.navigate(Route::Login);
        assert_eq!(
            navigator.take_transitions(),
            vec![Transition {
                from: Route::Login,
                to: Route::Login
            }]
        );
    }

    #[test]
    fn test_transitions_keep_every_route_left() {
        let mut navigator = Navigator::new(Route::Login);
        navigator.navigate(Route::Register);
        navigator.navigate(Route::Home);

        let left: Vec<Route> = navigator
            .take_transitions()
            .into_iter()
            .map(|t| t.from)
            .collect();
        assert_eq!(left, vec![Route::Login, Route::Register]);
        assert_eq!(navigator.current(), Route::Home);
    }
}
