//! Login submission controller

use super::NETWORK_FAILURE;
use crate::api::{ApiError, AuthApi, Credentials, SessionData};
use crate::router::{Route, Router};
use crate::session::SessionStore;
use crate::state::{
    validate_login, AttemptId, LoginForm, Submission, SubmissionState, SubmitBlocked,
    ValidationErrors,
};

pub const LOGIN_FAILED: &str = "Login failed";

/// A validated login ready to be sent
#[derive(Debug)]
pub struct PendingLogin {
    pub attempt: AttemptId,
    pub credentials: Credentials,
}

impl PendingLogin {
    /// Issue the request. This is the only I/O of a login attempt.
    pub async fn send(self, api: &dyn AuthApi) -> LoginOutcome {
        let result = api.login(&self.credentials).await;
        LoginOutcome {
            attempt: self.attempt,
            result,
        }
    }
}

/// Result of one login attempt
#[derive(Debug)]
pub struct LoginOutcome {
    pub attempt: AttemptId,
    pub result: Result<SessionData, ApiError>,
}

/// Drives the login form through validation and submission
#[derive(Debug, Default)]
pub struct LoginController {
    submission: Submission,
    errors: ValidationErrors,
}

impl LoginController {
    pub fn state(&self) -> &SubmissionState {
        self.submission.state()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validate the form and, if it passes, start a new attempt
    pub fn prepare(&mut self, form: &LoginForm) -> Result<PendingLogin, SubmitBlocked> {
        if self.submission.state().is_in_flight() {
            tracing::debug!("Login submit ignored while a request is in flight");
            return Err(SubmitBlocked::InFlight);
        }

        self.errors = validate_login(form);
        if !self.errors.is_empty() {
            tracing::debug!("Login blocked by validation: {:?}", self.errors);
            return Err(SubmitBlocked::Invalid);
        }

        let attempt = self.submission.begin()?;
        tracing::info!("Submitting login {attempt}");
        Ok(PendingLogin {
            attempt,
            credentials: Credentials {
                email: form.email.as_text().to_string(),
                password: form.password.as_text().to_string(),
            },
        })
    }

    /// Apply the outcome of an attempt. Returns false when it was stale.
    pub fn complete(
        &mut self,
        outcome: LoginOutcome,
        session: &mut dyn SessionStore,
        router: &mut dyn Router,
    ) -> bool {
        let LoginOutcome { attempt, result } = outcome;
        match result {
            Ok(data) => {
                if !self.submission.succeed(attempt) {
                    return false;
                }
                tracing::info!("Login successful");
                session.login(data);
                router.navigate(Route::Home);
            }
            Err(err) => {
                let reason = if err.is_rejection() {
                    LOGIN_FAILED
                } else {
                    NETWORK_FAILURE
                };
                if !self.submission.fail(attempt, reason) {
                    return false;
                }
                tracing::error!("Login failed: {err}");
            }
        }
        true
    }

    /// Validate, send and apply the outcome inline
    #[cfg(test)]
    pub async fn submit(
        &mut self,
        form: &LoginForm,
        api: &dyn AuthApi,
        session: &mut dyn SessionStore,
        router: &mut dyn Router,
    ) -> Result<(), SubmitBlocked> {
        let pending = self.prepare(form)?;
        let outcome = pending.send(api).await;
        self.complete(outcome, session, router);
        Ok(())
    }
}
