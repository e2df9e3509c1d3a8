//! HTTP request handlers for the ZimEdu web server
//!
//! This module contains all the HTTP request handlers organized by screen.

pub mod community;
pub mod health;
pub mod profile;
pub mod resources;
pub mod session;
pub mod tutoring;
pub mod types;

pub use community::*;
pub use health::*;
pub use profile::*;
pub use resources::*;
pub use session::*;
pub use tutoring::*;

pub use types::*;
