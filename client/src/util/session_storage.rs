//! Browser `sessionStorage` backend for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `sessionStorage` is scoped to one tab and cleared when the tab closes,
//! which is exactly the lifetime of a signed-in session here. Outside the
//! browser (SSR, native tests) every call reports
//! [`StorageError::Unavailable`] and the store treats that as "no record".

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use session::{SessionStorage, StorageError};

/// [`SessionStorage`] over `window.sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .session_storage()
        .map_err(js_error)?
        .ok_or_else(|| StorageError::Unavailable("sessionStorage is not exposed".to_owned()))
}

/// Map a thrown DOM exception onto a [`StorageError`].
#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    let name = js_sys::Reflect::get(&err, &wasm_bindgen::JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if name == "QuotaExceededError" {
        StorageError::QuotaExceeded
    } else {
        StorageError::AccessDenied(format!("{err:?}"))
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> StorageError {
    StorageError::Unavailable("not running in a browser".to_owned())
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(unavailable())
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.remove_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(unavailable())
        }
    }
}
