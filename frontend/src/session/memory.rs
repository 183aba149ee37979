use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use super::{Millis, Persistence, PersistenceError};

/// In memory [`Persistence`] with a clock that only moves when told to.
#[derive(Default)]
pub struct MemoryPersistence {
    now: Cell<Millis>,
    cookies: RefCell<HashMap<String, (String, Millis)>>,
    tab: RefCell<HashMap<String, String>>,
    fail_tab_writes: Cell<bool>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Millis) -> Self {
        let persistence = Self::new();
        persistence.now.set(now);
        persistence
    }

    #[cfg(test)]
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by.as_millis() as Millis);
    }

    /// Absolute expiry of a live cookie.
    #[cfg(test)]
    pub fn cookie_expiry(&self, name: &str) -> Option<Millis> {
        self.cookies
            .borrow()
            .get(name)
            .map(|(_, expires_at)| *expires_at)
            .filter(|expires_at| *expires_at > self.now.get())
    }

    /// Makes every following tab storage write fail, like a full quota.
    #[cfg(test)]
    pub fn fail_tab_writes(&self) {
        self.fail_tab_writes.set(true);
    }
}

impl Persistence for MemoryPersistence {
    fn now(&self) -> Millis {
        self.now.get()
    }

    fn cookie(&self, name: &str) -> Option<String> {
        let now = self.now.get();
        self.cookies
            .borrow()
            .get(name)
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(value, _)| value.clone())
    }

    fn set_cookie(
        &self,
        name: &str,
        value: &str,
        max_age: Duration,
    ) -> Result<(), PersistenceError> {
        let expires_at = self.now.get() + max_age.as_millis() as Millis;
        self.cookies
            .borrow_mut()
            .insert(name.to_owned(), (value.to_owned(), expires_at));
        Ok(())
    }

    fn remove_cookie(&self, name: &str) {
        self.cookies.borrow_mut().remove(name);
    }

    fn tab_item(&self, key: &str) -> Option<String> {
        self.tab.borrow().get(key).cloned()
    }

    fn set_tab_item(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_tab_writes.get() {
            return Err(PersistenceError::TabStorage("quota exceeded".into()));
        }
        self.tab.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_tab_item(&self, key: &str) {
        self.tab.borrow_mut().remove(key);
    }
}
