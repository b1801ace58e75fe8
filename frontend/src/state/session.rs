use std::{cell::RefCell, rc::Rc};

use crate::utils::storage as storage_utils;

pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Durable home of the single session token.
pub trait TokenStore {
    fn save(&self, token: &str) -> Result<(), String>;
    fn load(&self) -> Option<String>;
    fn clear(&self);
}

/// Browser `localStorage`, survives reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn save(&self, token: &str) -> Result<(), String> {
        storage_utils::write_item(TOKEN_STORAGE_KEY, token)
    }

    fn load(&self) -> Option<String> {
        match storage_utils::read_item(TOKEN_STORAGE_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                log::warn!("Session token unavailable: {}", err);
                None
            }
        }
    }

    fn clear(&self) {
        if let Err(err) = storage_utils::remove_item(TOKEN_STORAGE_KEY) {
            log::warn!("Failed to clear session token: {}", err);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<dyn TokenStore>,
}

impl Default for SessionStore {
    fn default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::browser()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }
}

impl SessionStore {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            inner: Rc::new(store),
        }
    }

    pub fn browser() -> Self {
        Self::new(LocalTokenStore)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    pub fn save(&self, token: &str) -> Result<(), String> {
        self.inner.save(token)
    }

    pub fn load(&self) -> Option<String> {
        self.inner.load()
    }

    pub fn clear(&self) {
        self.inner.clear()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_persists_under_fixed_key() {
        let store = SessionStore::browser();
        store.save("persisted").unwrap();
        assert_eq!(
            storage_utils::read_item(TOKEN_STORAGE_KEY).unwrap().as_deref(),
            Some("persisted")
        );
        store.clear();
        assert!(store.load().is_none());
    }
}
