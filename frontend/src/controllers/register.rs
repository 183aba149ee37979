use interfacing::RegistrationForm;
use secrecy::SecretString;

use super::{Outcome, ValidationError};
use crate::dialog::Notice;
use crate::router::Route;
use crate::services::Services;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const REGISTRATION_FAILED: &str = "Registration failed! Try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegisterField {
    Username(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
}

/// Live feedback under the password inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint {
    pub ok: bool,
    pub text: &'static str,
}

impl RegisterForm {
    pub fn apply(&mut self, field: RegisterField) {
        match field {
            RegisterField::Username(username) => self.username = username,
            RegisterField::Email(email) => self.email = email,
            RegisterField::Password(password) => self.password = password,
            RegisterField::ConfirmPassword(password) => self.confirm_password = password,
        }
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_password(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    fn long_enough(&self) -> bool {
        self.password.chars().count() >= MIN_PASSWORD_LEN
    }

    pub fn password_hint(&self) -> Option<Hint> {
        if self.password.is_empty() {
            return None;
        }

        Some(if self.long_enough() {
            Hint {
                ok: true,
                text: "✓ Password is strong enough",
            }
        } else {
            Hint {
                ok: false,
                text: "✗ Password must be at least 6 characters",
            }
        })
    }

    pub fn match_hint(&self) -> Option<Hint> {
        if self.confirm_password.is_empty() {
            return None;
        }

        Some(if self.password == self.confirm_password {
            Hint {
                ok: true,
                text: "✓ Passwords match",
            }
        } else {
            Hint {
                ok: false,
                text: "✗ Passwords do not match",
            }
        })
    }

    /// Body of the registration request; the confirmation is checked, never sent.
    pub fn validate(&self) -> Result<RegistrationForm, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if !self.long_enough() {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }

        Ok(RegistrationForm {
            username: self.username.clone(),
            email: self.email.clone(),
            password: SecretString::new(self.password.clone()),
        })
    }
}

/// Registers a new admin, landing on the login view once the admin acknowledges it.
pub async fn submit(services: &Services, form: &RegisterForm) -> Outcome<Route> {
    let registration = match form.validate() {
        Ok(registration) => registration,
        Err(e) => {
            services
                .dialogs
                .notify(Notice::warning("Registration", e.to_string()))
                .await;
            return Outcome::Aborted;
        }
    };

    log::info!("registering admin {}", registration.username);

    match services.api.register(&registration).await {
        Ok(()) => {
            services
                .dialogs
                .notify(Notice::success("Success!", "Registration successful!"))
                .await;
            Outcome::Done(Route::Login)
        }
        Err(e) => {
            let message = e.user_message(REGISTRATION_FAILED);
            log::warn!("registration failed: {}", e);
            services
                .dialogs
                .notify(Notice::error("Registration Failed", message.clone()))
                .await;
            Outcome::Failed(message)
        }
    }
}
