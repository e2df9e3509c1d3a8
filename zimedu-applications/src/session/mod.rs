//! Session Management Module
//!
//! Mock authentication: a single session record shared by everything the
//! application root hands it to.

pub mod manager;
pub mod types;

pub use manager::{SessionManager, MOCK_USER_ID, PLACEHOLDER_NAME};
pub use types::*;
