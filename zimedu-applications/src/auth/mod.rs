//! Authentication forms
//!
//! Sign-up is checked before it reaches the session manager; sign-in is not. The
//! session manager itself never rejects anything.

pub mod forms;

pub use forms::{FormError, SignInForm, SignUpForm};
