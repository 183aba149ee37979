use crate::router::Route;
use crate::session::{Session, SessionStore};

#[derive(Debug, PartialEq)]
pub enum Guard {
    Allow(Session),
    Redirect(Route),
}

/// Decides whether a protected view may be built, evaluated on every render.
pub fn require_session(store: &SessionStore) -> Guard {
    match store.read() {
        Some(session) => Guard::Allow(session),
        None => Guard::Redirect(Route::Login),
    }
}
