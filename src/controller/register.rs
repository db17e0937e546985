//! Registration submission controller

use super::NETWORK_FAILURE;
use crate::api::{ApiError, AuthApi, Registration};
use crate::router::{Route, Router};
use crate::state::{
    validate_registration, AttemptId, RegisterForm, Submission, SubmissionState, SubmitBlocked,
};

pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const IMAGE_REQUIRED: &str = "Please select an image";

/// A validated registration ready to be sent
#[derive(Debug)]
pub struct PendingRegistration {
    pub attempt: AttemptId,
    pub registration: Registration,
}

impl PendingRegistration {
    pub async fn send(self, api: &dyn AuthApi) -> RegisterOutcome {
        let result = api.register(&self.registration).await;
        RegisterOutcome {
            attempt: self.attempt,
            result,
        }
    }
}

/// Result of one registration attempt
#[derive(Debug)]
pub struct RegisterOutcome {
    pub attempt: AttemptId,
    pub result: Result<(), ApiError>,
}

/// Drives the registration form through validation and submission.
///
/// Holds a single message shared by validation and submission failures.
#[derive(Debug, Default)]
pub struct RegisterController {
    submission: Submission,
    error: Option<String>,
}

impl RegisterController {
    pub fn state(&self) -> &SubmissionState {
        self.submission.state()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn prepare(&mut self, form: &RegisterForm) -> Result<PendingRegistration, SubmitBlocked> {
        if self.submission.state().is_in_flight() {
            tracing::debug!("Registration submit ignored while a request is in flight");
            return Err(SubmitBlocked::InFlight);
        }

        self.error = None;
        if let Some(err) = validate_registration(form) {
            tracing::debug!("Registration blocked by validation: {err}");
            self.error = Some(err.to_string());
            return Err(SubmitBlocked::Invalid);
        }
        let Some(image) = form.image_attachment() else {
            tracing::debug!("Registration blocked: no image selected");
            self.error = Some(IMAGE_REQUIRED.to_string());
            return Err(SubmitBlocked::Invalid);
        };

        let attempt = self.submission.begin()?;
        tracing::info!("Submitting registration {attempt}");
        Ok(PendingRegistration {
            attempt,
            registration: Registration {
                full_name: form.full_name.as_text().to_string(),
                email: form.email.as_text().to_string(),
                phone_number: form.phone_number.as_text().to_string(),
                password: form.password.as_text().to_string(),
                image: image.clone(),
            },
        })
    }

    /// Apply the outcome of an attempt. Returns false when it was stale.
    pub fn complete(&mut self, outcome: RegisterOutcome, router: &mut dyn Router) -> bool {
        let RegisterOutcome { attempt, result } = outcome;
        match result {
            Ok(()) => {
                if !self.submission.succeed(attempt) {
                    return false;
                }
                tracing::info!("Registered successfully");
                router.navigate(Route::Login);
            }
            Err(err) => {
                let reason = if err.is_rejection() {
                    REGISTRATION_FAILED
                } else {
                    NETWORK_FAILURE
                };
                if !self.submission.fail(attempt, reason) {
                    return false;
                }
                tracing::error!("Error submitting registration: {err}");
                self.error = Some(reason.to_string());
            }
        }
        true
    }

    /// Validate, send and apply the outcome inline
    #[cfg(test)]
    pub async fn submit(
        &mut self,
        form: &RegisterForm,
        api: &dyn AuthApi,
        router: &mut dyn Router,
    ) -> Result<(), SubmitBlocked> {
        let pending = self.prepare(form)?;
        let outcome = pending.send(api).await;
        self.complete(outcome, router);
        Ok(())
    }
}
