use std::rc::Rc;
use std::time::Duration;

use cookie::{Cookie, SameSite};
use gloo_storage::{SessionStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use super::{MemoryPersistence, Millis, Persistence, PersistenceError};

/// Cookies of the current document plus the tab's `sessionStorage`.
pub struct BrowserPersistence;

impl BrowserPersistence {
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    /// Persistence for the running page, or memory when there is no document to hold cookies.
    pub fn or_memory() -> Rc<dyn Persistence> {
        if Self::document().is_some() {
            return Rc::new(BrowserPersistence);
        }

        log::warn!("no document to keep cookies in, the session lives in memory");
        Rc::new(MemoryPersistence::starting_at(js_sys::Date::now() as Millis))
    }
}

impl Persistence for BrowserPersistence {
    fn now(&self) -> Millis {
        js_sys::Date::now() as Millis
    }

    fn cookie(&self, name: &str) -> Option<String> {
        let jar = Self::document()?.cookie().ok()?;
        find_cookie(&jar, name)
    }

    fn set_cookie(
        &self,
        name: &str,
        value: &str,
        max_age: Duration,
    ) -> Result<(), PersistenceError> {
        let document = Self::document().ok_or(PersistenceError::NoCookieJar)?;
        document
            .set_cookie(&cookie_line(name, value, max_age))
            .map_err(|_| PersistenceError::Cookie(name.to_owned()))
    }

    fn remove_cookie(&self, name: &str) {
        let removed = Self::document()
            .map(|document| document.set_cookie(&cookie_line(name, "", Duration::ZERO)).is_ok())
            .unwrap_or(false);

        if !removed {
            log::warn!("failed to remove cookie {}", name);
        }
    }

    fn tab_item(&self, key: &str) -> Option<String> {
        SessionStorage::get::<String>(key).ok()
    }

    fn set_tab_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        SessionStorage::set(key, value).map_err(|e| PersistenceError::TabStorage(e.to_string()))
    }

    fn remove_tab_item(&self, key: &str) {
        SessionStorage::delete(key);
    }
}

/// Percent encoded `Set-Cookie` style assignment for `document.cookie`.
pub fn cookie_line(name: &str, value: &str, max_age: Duration) -> String {
    let cookie = Cookie::build(name, value)
        .max_age(cookie::time::Duration::seconds(max_age.as_secs() as i64))
        .path("/")
        .secure(true)
        .same_site(SameSite::Strict)
        .finish();

    cookie.encoded().to_string()
}

/// Value of the first `name` cookie in a `document.cookie` string.
pub fn find_cookie(jar: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(jar)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}
