//! Application state definitions

use super::forms::{LoginForm, RegisterForm};
use crate::controller::{LoginController, RegisterController};
use crate::router::{Navigator, Route};
use crate::session::Session;

/// The login form instance and its controller
#[derive(Debug, Default)]
pub struct LoginPage {
    pub form: LoginForm,
    pub controller: LoginController,
}

impl LoginPage {
    pub fn new(show_password: bool) -> Self {
        let mut page = Self::default();
        page.form.show_password = show_password;
        page
    }
}

/// The registration form instance and its controller
#[derive(Debug, Default)]
pub struct RegisterPage {
    pub form: RegisterForm,
    pub controller: RegisterController,
    /// Problem with the selected image, reported before validation runs
    pub image_error: Option<String>,
}

impl RegisterPage {
    pub fn new(show_password: bool) -> Self {
        let mut page = Self::default();
        page.form.show_password = show_password;
        page
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub navigator: Navigator,
    pub session: Session,
    pub login: LoginPage,
    pub register: RegisterPage,
    pub status_message: Option<String>,
    /// Initial password visibility for freshly mounted forms
    pub show_passwords: bool,
}

impl AppState {
    pub fn new(start: Route, show_passwords: bool) -> Self {
        Self {
            navigator: Navigator::new(start),
            session: Session::default(),
            login: LoginPage::new(show_passwords),
            register: RegisterPage::new(show_passwords),
            status_message: None,
            show_passwords,
        }
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    /// Mount a fresh instance of the form behind `route`.
    ///
    /// The replaced controller's in-flight attempt is orphaned, so its
    /// outcome is discarded when it arrives.
    pub fn mount(&mut self, route: Route) {
        match route {
            Route::Login => self.login = LoginPage::new(self.show_passwords),
            Route::Register => self.register = RegisterPage::new(self.show_passwords),
            Route::Home => {}
        }
        self.status_message = None;
    }

    /// Returns true if either form is waiting on the service
    pub fn is_busy(&self) -> bool {
        self.login.controller.state().is_in_flight()
            || self.register.controller.state().is_in_flight()
    }
}
