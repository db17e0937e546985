//! Application state and core logic

use crate::api::{AuthApi, AuthClient};
use crate::config::AuthTuiConfig;
use crate::controller::{LoginOutcome, RegisterOutcome, IMAGE_REQUIRED};
use crate::platform;
use crate::router::{Route, Router, Transition};
use crate::state::{AppState, Form, ImageAttachment, SubmissionState};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outcomes sent back to the event loop by request tasks
#[derive(Debug)]
pub enum AuthEvent {
    Login(LoginOutcome),
    Register(RegisterOutcome),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Authentication service client
    api: Arc<dyn AuthApi>,
    events_tx: mpsc::UnboundedSender<AuthEvent>,
    events_rx: mpsc::UnboundedReceiver<AuthEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured service
    pub fn new(config: &AuthTuiConfig) -> Self {
        let base_url = config.api_base_url();
        tracing::info!("Using authentication service at {base_url}");
        Self::with_api(
            Arc::new(AuthClient::new(base_url)),
            config.start_route(),
            config.show_passwords(),
        )
    }

    pub fn with_api(api: Arc<dyn AuthApi>, start: Route, show_passwords: bool) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(start, show_passwords),
            api,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press on the current route
    pub async fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_route() {
            Route::Login => self.handle_login_key(key),
            Route::Register => self.handle_register_key(key).await,
            Route::Home => self.handle_home_key(key),
        }
        self.apply_route_transitions();
    }

    /// Apply every request outcome that arrived since the last tick
    pub fn poll_auth_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_auth_event(event);
        }
    }

    fn apply_auth_event(&mut self, event: AuthEvent) {
        let state = &mut self.state;
        let registered_email = match event {
            AuthEvent::Login(outcome) => {
                state
                    .login
                    .controller
                    .complete(outcome, &mut state.session, &mut state.navigator);
                None
            }
            AuthEvent::Register(outcome) => {
                let email = state.register.form.email.as_text().to_string();
                let applied = state
                    .register
                    .controller
                    .complete(outcome, &mut state.navigator);
                (applied && *state.register.controller.state() == SubmissionState::Succeeded)
                    .then_some(email)
            }
        };
        self.apply_route_transitions();
        if let Some(email) = registered_email {
            let login = &mut self.state.login.form;
            login.set_field("email", &email);
            login.set_active_field(1);
            self.state.status_message = Some("Registration complete. Log in to continue.".into());
        }
    }

    /// Mount fresh pages for every route entered and every route left.
    ///
    /// A page left behind drops its controller, so an attempt still in
    /// flight for it is discarded when its outcome arrives.
    fn apply_route_transitions(&mut self) {
        for Transition { from, to } in self.state.navigator.take_transitions() {
            tracing::debug!("Left {} for {}", from.path(), to.path());
            if from != to {
                self.state.mount(from);
            }
            self.state.mount(to);
        }
    }

    /// Handle keys in the Login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') if platform::is_shortcut(key.modifiers) => {
                self.state.login.form.toggle_password_visibility();
            }
            KeyCode::Char('n') if platform::is_shortcut(key.modifiers) => {
                self.state.navigator.navigate(Route::Register);
            }
            KeyCode::Tab | KeyCode::Down => self.state.login.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.login.form.prev_field(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Backspace => self.state.login.form.get_active_field_mut().pop_char(),
            KeyCode::Char(c) => self.state.login.form.get_active_field_mut().push_char(c),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let page = &mut self.state.login;
        let Ok(pending) = page.controller.prepare(&page.form) else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = pending.send(api.as_ref()).await;
            // Fails only once the app has shut down
            let _ = tx.send(AuthEvent::Login(outcome));
        });
    }

    /// Handle keys in the Register view
    async fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') if platform::is_shortcut(key.modifiers) => {
                self.state.register.form.toggle_password_visibility();
            }
            KeyCode::Char('n') | KeyCode::Char('l') if platform::is_shortcut(key.modifiers) => {
                self.state.navigator.navigate(Route::Login);
            }
            KeyCode::Tab | KeyCode::Down => self.state.register.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.register.form.prev_field(),
            KeyCode::Enter if self.state.register.form.is_image_field_active() => {
                self.load_register_image().await;
            }
            KeyCode::Enter => self.submit_register().await,
            KeyCode::Esc => self.quit = true,
            KeyCode::Backspace => self.state.register.form.get_active_field_mut().pop_char(),
            KeyCode::Char(c) => self.state.register.form.get_active_field_mut().push_char(c),
            _ => {}
        }
    }

    /// Load the image at the typed path. Returns false if it was rejected.
    async fn load_register_image(&mut self) -> bool {
        let page = &mut self.state.register;
        let path = page.form.image.as_text().trim().to_string();
        if path.is_empty() {
            page.image_error = None;
            return true;
        }

        match ImageAttachment::load(&path).await {
            Ok(image) => {
                tracing::info!("Selected {} ({} bytes)", image.file_name, image.bytes.len());
                page.form.set_image(image);
                page.image_error = None;
                true
            }
            Err(err) => {
                tracing::warn!("Image rejected: {err}");
                page.image_error = Some(err.to_string());
                false
            }
        }
    }

    async fn submit_register(&mut self) {
        if self.state.register.form.has_unloaded_image_path() && !self.load_register_image().await
        {
            return;
        }

        let page = &mut self.state.register;
        let prepared = page.controller.prepare(&page.form);
        if page.controller.error() == Some(IMAGE_REQUIRED) {
            page.image_error = Some(IMAGE_REQUIRED.to_string());
        }
        let Ok(pending) = prepared else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = pending.send(api.as_ref()).await;
            let _ = tx.send(AuthEvent::Register(outcome));
        });
    }

    /// Handle keys in the Home view
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('l') => {
                self.state.session.logout();
                self.state.navigator.navigate(Route::Login);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockAuthApi, SessionData, UserProfile};
    use crossterm::event::KeyModifiers;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
    }

    /// Wait for the next request outcome and apply it
    async fn settle(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(5), app.events_rx.recv())
            .await
            .expect("request task did not finish")
            .expect("channel closed");
        app.apply_auth_event(event);
    }

    fn session_data() -> SessionData {
        SessionData {
            access_token: Some("tok".to_string()),
            refresh_token: None,
            user: UserProfile {
                email: "a@b.com".to_string(),
                full_name: "Ada".to_string(),
                phone_number: String::new(),
                image: None,
            },
        }
    }

    fn app_with(api: MockAuthApi, start: Route) -> App {
        App::with_api(Arc::new(api), start, false)
    }

    async fn fill_login(app: &mut App, email: &str, password: &str) {
        type_text(app, email).await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(app, password).await;
    }

    mod login_view {
        use super::*;

        #[tokio::test]
        async fn test_successful_login_goes_home() {
            let mut api = MockAuthApi::new();
            api.expect_login()
                .withf(|c| c.email == "a@b.com" && c.password == "secret1")
                .times(1)
                .returning(|_| Ok(session_data()));
            let mut app = app_with(api, Route::Login);

            fill_login(&mut app, "a@b.com", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            assert!(app.state.is_busy());

            settle(&mut app).await;
            assert_eq!(app.state.current_route(), Route::Home);
            let active = app.state.session.current().unwrap();
            assert_eq!(active.data.user.email, "a@b.com");
            assert_eq!(app.state.login.form.password.as_text(), "");
        }

        #[tokio::test]
        async fn test_invalid_login_shows_errors_without_request() {
            let mut api = MockAuthApi::new();
            api.expect_login().never();
            let mut app = app_with(api, Route::Login);

            fill_login(&mut app, "bad", "123").await;
            app.handle_key(key(KeyCode::Enter)).await;

            assert!(!app.state.is_busy());
            let errors = app.state.login.controller.errors();
            assert_eq!(errors.get("email"), Some("Please enter a valid email."));
            assert_eq!(
                errors.get("password"),
                Some("Password must be at least 6 characters long.")
            );
        }

        #[tokio::test]
        async fn test_rejected_login_stays_on_form() {
            let mut api = MockAuthApi::new();
            api.expect_login()
                .times(1)
                .returning(|_| Err(ApiError::Rejected { status: 401 }));
            let mut app = app_with(api, Route::Login);

            fill_login(&mut app, "a@b.com", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            settle(&mut app).await;

            assert_eq!(app.state.current_route(), Route::Login);
            assert!(!app.state.session.is_logged_in());
            assert_eq!(
                app.state.login.controller.state().failure_reason(),
                Some("Login failed")
            );
            assert_eq!(app.state.login.form.email.as_text(), "a@b.com");
            assert_eq!(app.state.login.form.password.as_text(), "secret1");
        }

        #[tokio::test]
        async fn test_editing_allowed_and_resubmit_ignored_while_in_flight() {
            let mut api = MockAuthApi::new();
            api.expect_login()
                .times(1)
                .returning(|_| Err(ApiError::Rejected { status: 500 }));
            let mut app = app_with(api, Route::Login);

            fill_login(&mut app, "a@b.com", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            type_text(&mut app, "2").await;
            app.handle_key(key(KeyCode::Enter)).await;

            assert_eq!(app.state.login.form.password.as_text(), "secret12");
            settle(&mut app).await;
            assert!(!app.state.is_busy());
        }

        #[tokio::test]
        async fn test_outcome_for_torn_down_form_is_discarded() {
            let mut api = MockAuthApi::new();
            api.expect_login().times(1).returning(|_| Ok(session_data()));
            let mut app = app_with(api, Route::Login);

            fill_login(&mut app, "a@b.com", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            app.handle_key(ctrl('n')).await;
            app.handle_key(ctrl('n')).await;
            assert_eq!(app.state.current_route(), Route::Login);
            assert_eq!(app.state.login.form.email.as_text(), "");

            settle(&mut app).await;
            assert_eq!(app.state.current_route(), Route::Login);
            assert!(!app.state.session.is_logged_in());
            assert_eq!(app.state.login.controller.state(), &SubmissionState::Idle);
        }

        #[tokio::test]
        async fn test_login_outcome_after_leaving_for_register_is_discarded() {
            let mut api = MockAuthApi::new();
            api.expect_login().times(1).returning(|_| Ok(session_data()));
            let mut app = app_with(api, Route::Login);

            fill_login(&mut app, "a@b.com", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            app.handle_key(ctrl('n')).await;
            type_text(&mut app, "Typed name").await;

            settle(&mut app).await;
            assert_eq!(app.state.current_route(), Route::Register);
            assert!(!app.state.session.is_logged_in());
            assert_eq!(app.state.register.form.full_name.as_text(), "Typed name");
            assert!(!app.state.is_busy());
        }

        #[tokio::test]
        async fn test_toggle_password_visibility() {
            let mut app = app_with(MockAuthApi::new(), Route::Login);
            app.handle_key(ctrl('r')).await;
            assert!(app.state.login.form.show_password);
            assert_eq!(app.state.login.form.email.as_text(), "");
        }

        #[tokio::test]
        async fn test_escape_quits() {
            let mut app = app_with(MockAuthApi::new(), Route::Login);
            app.handle_key(key(KeyCode::Esc)).await;
            assert!(app.should_quit());
        }
    }

    mod register_view {
        use super::*;
        use std::path::PathBuf;

        async fn temp_image() -> PathBuf {
            let path = std::env::temp_dir().join(format!("auth-tui-{}.png", uuid::Uuid::new_v4()));
            tokio::fs::write(&path, b"PNG").await.unwrap();
            path
        }

        async fn fill_register(app: &mut App, image_path: &str, password: &str, confirm: &str) {
            app.handle_key(ctrl('n')).await;
            for value in ["Ada Lovelace", "ada@x.io", "5551234"] {
                type_text(app, value).await;
                app.handle_key(key(KeyCode::Tab)).await;
            }
            type_text(app, image_path).await;
            app.handle_key(key(KeyCode::Tab)).await;
            type_text(app, password).await;
            app.handle_key(key(KeyCode::Tab)).await;
            type_text(app, confirm).await;
        }

        #[tokio::test]
        async fn test_switching_forms_mounts_fresh_instance() {
            let mut app = app_with(MockAuthApi::new(), Route::Login);
            app.handle_key(ctrl('n')).await;
            type_text(&mut app, "Ada").await;
            assert_eq!(app.state.current_route(), Route::Register);

            app.handle_key(ctrl('l')).await;
            app.handle_key(ctrl('n')).await;
            assert_eq!(app.state.register.form.full_name.as_text(), "");
        }

        #[tokio::test]
        async fn test_successful_registration_returns_to_login() {
            let path = temp_image().await;

            let mut api = MockAuthApi::new();
            api.expect_register()
                .withf(|r| r.image.bytes == b"PNG".to_vec())
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(api, Route::Login);

            fill_register(&mut app, &path.to_string_lossy(), "secret1", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            settle(&mut app).await;

            assert_eq!(app.state.current_route(), Route::Login);
            assert!(app.state.status_message.is_some());
            assert_eq!(app.state.login.form.email.as_text(), "ada@x.io");
            assert_eq!(app.state.login.form.active_field(), 1);
            assert_eq!(app.state.register.form.full_name.as_text(), "");
            tokio::fs::remove_file(&path).await.unwrap();
        }

        #[tokio::test]
        async fn test_register_outcome_after_leaving_for_login_is_discarded() {
            let path = temp_image().await;

            let mut api = MockAuthApi::new();
            api.expect_register().times(1).returning(|_| Ok(()));
            let mut app = app_with(api, Route::Login);

            fill_register(&mut app, &path.to_string_lossy(), "secret1", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            app.handle_key(ctrl('l')).await;
            type_text(&mut app, "me@x.io").await;

            settle(&mut app).await;
            assert_eq!(app.state.current_route(), Route::Login);
            assert_eq!(app.state.login.form.email.as_text(), "me@x.io");
            assert!(app.state.status_message.is_none());
            assert!(!app.state.is_busy());
            tokio::fs::remove_file(&path).await.unwrap();
        }

        #[tokio::test]
        async fn test_missing_image_blocks_request() {
            let mut api = MockAuthApi::new();
            api.expect_register().never();
            let mut app = app_with(api, Route::Login);

            fill_register(&mut app, "", "secret1", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;

            assert_eq!(app.state.register.image_error.as_deref(), Some(IMAGE_REQUIRED));
            assert!(!app.state.is_busy());
            assert_eq!(app.state.register.controller.state(), &SubmissionState::Idle);
        }

        #[tokio::test]
        async fn test_mismatched_passwords_block_request() {
            let path = temp_image().await;
            let mut api = MockAuthApi::new();
            api.expect_register().never();
            let mut app = app_with(api, Route::Login);

            fill_register(&mut app, &path.to_string_lossy(), "secret1", "secret2").await;
            app.handle_key(key(KeyCode::Enter)).await;

            assert_eq!(
                app.state.register.controller.error(),
                Some("Passwords do not match")
            );
            assert!(!app.state.is_busy());
            tokio::fs::remove_file(&path).await.unwrap();
        }

        #[tokio::test]
        async fn test_failed_registration_reports_error() {
            let path = temp_image().await;
            let mut api = MockAuthApi::new();
            api.expect_register()
                .times(1)
                .returning(|_| Err(ApiError::Rejected { status: 400 }));
            let mut app = app_with(api, Route::Login);

            fill_register(&mut app, &path.to_string_lossy(), "secret1", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            settle(&mut app).await;

            assert_eq!(app.state.current_route(), Route::Register);
            assert_eq!(
                app.state.register.controller.error(),
                Some("Registration failed")
            );
            assert_eq!(app.state.register.form.email.as_text(), "ada@x.io");
            tokio::fs::remove_file(&path).await.unwrap();
        }

        #[tokio::test]
        async fn test_non_image_path_blocks_submit() {
            let mut api = MockAuthApi::new();
            api.expect_register().never();
            let mut app = app_with(api, Route::Login);

            fill_register(&mut app, "notes.txt", "secret1", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;

            assert!(app.state.register.image_error.is_some());
            assert!(!app.state.is_busy());
        }
    }

    mod home_view {
        use super::*;

        #[tokio::test]
        async fn test_logout_returns_to_login() {
            let mut api = MockAuthApi::new();
            api.expect_login().times(1).returning(|_| Ok(session_data()));
            let mut app = app_with(api, Route::Login);

            fill_login(&mut app, "a@b.com", "secret1").await;
            app.handle_key(key(KeyCode::Enter)).await;
            settle(&mut app).await;
            assert_eq!(app.state.current_route(), Route::Home);

            app.handle_key(key(KeyCode::Char('l'))).await;
            assert_eq!(app.state.current_route(), Route::Login);
            assert!(!app.state.session.is_logged_in());
            assert_eq!(app.state.login.form.email.as_text(), "");
        }
    }
}
