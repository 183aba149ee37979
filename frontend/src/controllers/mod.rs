//! What the views do, apart from drawing.
//!
//! Every action is an async function over [`Services`] that surfaces its own
//! notices and reports an [`Outcome`]; the view folds the outcome into its
//! state and navigates when told to.

pub mod dashboard;
pub mod edit_student;
pub mod login;
pub mod register;
mod student_draft;

pub use student_draft::{DraftField, StudentDraft};

use interfacing::PercentageRange;

use crate::dialog::Notice;
use crate::router::Route;
use crate::services::Services;
use crate::session::SessionStore;

#[derive(Debug, PartialEq)]
pub enum Outcome<T> {
    Done(T),
    /// Stopped before any request, by validation or by the admin.
    Aborted,
    /// Already shown to the admin, the message is kept for inline display.
    Failed(String),
    /// The API answered 401 and the session is gone.
    SignedOut,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingFields,

    #[error("Age must be a whole number")]
    InvalidAge,

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("Password must be at least {0} characters long!")]
    PasswordTooShort(usize),
}

/// Unconditional sign out.
pub fn logout(session: &SessionStore) -> Route {
    log::info!("logging out");
    session.clear();
    Route::Login
}

async fn sign_out(services: &Services, notice: Notice) {
    // a concurrent request already signed out and left the view
    if services.session.read().is_none() {
        log::debug!("session already gone, skipping {:?} notice", notice.title);
        return;
    }

    log::warn!("session rejected by the API: {}", notice.title);
    services.session.clear();
    services.dialogs.notify(notice).await;
}

/// Reference data for the range selector. Failures only get logged, except a 401.
pub async fn load_percentage_ranges(services: &Services) -> Outcome<Vec<PercentageRange>> {
    match services.api.percentage_ranges().await {
        Ok(ranges) => Outcome::Done(ranges),
        Err(e) if e.is_unauthorized() => {
            // the students fetch tells the admin, this one only has to drop the session
            services.session.clear();
            Outcome::SignedOut
        }
        Err(e) => {
            log::error!("Error fetching percentages: {}", e);
            Outcome::Failed(e.user_message("Failed to fetch percentages"))
        }
    }
}
