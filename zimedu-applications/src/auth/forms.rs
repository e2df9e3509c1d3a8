use serde::{Deserialize, Serialize};
use zimedu_core::Role;

/// Why a form was refused before submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Sign-in screen state. Nothing is checked; any email and password sign in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Sign-up screen state. The role picker starts on `student`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignUpForm {
        SignUpForm {
            name: "Rudo".to_string(),
            email: "rudo@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            role: Role::Parent,
        }
    }

    #[test]
    fn test_complete_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        for blank in ["name", "email", "password"] {
            let mut form = filled();
            match blank {
                "name" => form.name.clear(),
                "email" => form.email.clear(),
                _ => form.password.clear(),
            }
            assert_eq!(form.validate(), Err(FormError::MissingFields), "{blank}");
        }
    }

    #[test]
    fn test_password_mismatch() {
        let form = SignUpForm {
            confirm_password: "other".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_default_role_is_student() {
        assert_eq!(SignUpForm::default().role, Role::Student);
    }
}
