//! Session collaborator
//!
//! The login controller hands a decoded session to a `SessionStore` and
//! never holds it itself.

use crate::api::SessionData;
use chrono::{DateTime, Utc};

/// Receives the session established by a successful login
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    fn login(&mut self, session: SessionData);
}

/// A session held for the lifetime of the process
#[derive(Debug, Clone)]
pub struct ActiveSession {
    pub data: SessionData,
    pub established_at: DateTime<Utc>,
}

/// In-memory session store
#[derive(Debug, Default)]
pub struct Session {
    current: Option<ActiveSession>,
}

impl Session {
    pub fn current(&self) -> Option<&ActiveSession> {
        self.current.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn logout(&mut self) {
        if let Some(active) = self.current.take() {
            tracing::info!("Signed out {}", active.data.user.email);
        }
    }
}

impl SessionStore for Session {
    fn login(&mut self, session: SessionData) {
        tracing::info!("Signed in {}", session.user.email);
        self.current = Some(ActiveSession {
            data: session,
            established_at: Utc::now(),
        });
    }
}
