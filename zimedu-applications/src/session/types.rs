//! Session Types
//!
//! Observable state of the session manager.

use serde::Serialize;
use zimedu_core::{SessionState, User};

/// Point-in-time view of the session, published to every subscriber
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// Who is signed in, if anyone
    pub state: SessionState,
    /// An operation is in flight
    pub busy: bool,
}

impl SessionSnapshot {
    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }
}

/// The three session transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOperation {
    SignIn,
    SignUp,
    SignOut,
}

impl std::fmt::Display for SessionOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionOperation::SignIn => write!(f, "sign_in"),
            SessionOperation::SignUp => write!(f, "sign_up"),
            SessionOperation::SignOut => write!(f, "sign_out"),
        }
    }
}
