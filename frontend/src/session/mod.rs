//! Client side record of the signed in admin.
//!
//! The bearer token and admin id live in cookies that expire after
//! [`SESSION_TTL`], the display name lives in tab scoped storage until it is
//! cleared. [`SessionStore::read`] hands out a [`Session`] only when every entry
//! is present, so a half written or half expired session reads as absent.

mod browser;
mod memory;

pub use browser::BrowserPersistence;
pub use memory::MemoryPersistence;

use std::rc::Rc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

/// Milliseconds since the unix epoch.
pub type Millis = u64;

pub const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

const TOKEN_COOKIE: &str = "access_token";
const ADMIN_ID_COOKIE: &str = "admin_id";
const EXPIRY_COOKIE: &str = "token_expiry";
const DISPLAY_NAME_KEY: &str = "username";

#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("Cookie jar is unavailable")]
    NoCookieJar,

    #[error("Failed to write cookie {0}")]
    Cookie(String),

    #[error("Tab storage error: {0}")]
    TabStorage(String),
}

/// Storage surfaces a [`SessionStore`] writes to.
pub trait Persistence {
    fn now(&self) -> Millis;

    fn cookie(&self, name: &str) -> Option<String>;
    fn set_cookie(&self, name: &str, value: &str, max_age: Duration)
        -> Result<(), PersistenceError>;
    fn remove_cookie(&self, name: &str);

    fn tab_item(&self, key: &str) -> Option<String>;
    fn set_tab_item(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove_tab_item(&self, key: &str);
}

#[derive(Clone, Debug)]
pub struct Session {
    pub token: SecretString,
    pub admin_id: String,
    pub display_name: String,
    pub expires_at: Millis,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.token.expose_secret() == other.token.expose_secret()
            && self.admin_id == other.admin_id
            && self.display_name == other.display_name
            && self.expires_at == other.expires_at
    }
}

#[derive(Clone, derivative::Derivative)]
#[derivative(Debug, PartialEq)]
pub struct SessionStore {
    #[derivative(Debug = "ignore", PartialEq(compare_with = "Rc::ptr_eq"))]
    persistence: Rc<dyn Persistence>,
}

impl SessionStore {
    pub fn new(persistence: Rc<dyn Persistence>) -> Self {
        Self { persistence }
    }

    pub fn save(
        &self,
        token: &SecretString,
        admin_id: &str,
        display_name: &str,
    ) -> Result<Session, PersistenceError> {
        let expires_at = self.persistence.now() + SESSION_TTL.as_millis() as Millis;

        if let Err(e) = self.write(token, admin_id, display_name, expires_at) {
            self.clear();
            return Err(e);
        }

        log::debug!("session saved for admin {}", admin_id);

        Ok(Session {
            token: token.clone(),
            admin_id: admin_id.to_owned(),
            display_name: display_name.to_owned(),
            expires_at,
        })
    }

    fn write(
        &self,
        token: &SecretString,
        admin_id: &str,
        display_name: &str,
        expires_at: Millis,
    ) -> Result<(), PersistenceError> {
        let persistence = &self.persistence;
        persistence.set_cookie(TOKEN_COOKIE, token.expose_secret(), SESSION_TTL)?;
        persistence.set_cookie(ADMIN_ID_COOKIE, admin_id, SESSION_TTL)?;
        persistence.set_cookie(EXPIRY_COOKIE, &expires_at.to_string(), SESSION_TTL)?;
        persistence.set_tab_item(DISPLAY_NAME_KEY, display_name)
    }

    pub fn read(&self) -> Option<Session> {
        let persistence = &self.persistence;

        let token = persistence.cookie(TOKEN_COOKIE).filter(|v| !v.is_empty())?;
        let admin_id = persistence.cookie(ADMIN_ID_COOKIE).filter(|v| !v.is_empty())?;
        let expires_at = persistence.cookie(EXPIRY_COOKIE)?.parse().ok()?;
        let display_name = persistence.tab_item(DISPLAY_NAME_KEY)?;

        Some(Session {
            token: SecretString::new(token),
            admin_id,
            display_name,
            expires_at,
        })
    }

    pub fn clear(&self) {
        let persistence = &self.persistence;
        persistence.remove_cookie(TOKEN_COOKIE);
        persistence.remove_cookie(ADMIN_ID_COOKIE);
        persistence.remove_cookie(EXPIRY_COOKIE);
        persistence.remove_tab_item(DISPLAY_NAME_KEY);
        log::debug!("session cleared");
    }
}
