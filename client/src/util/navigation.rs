//! Window-level navigation used by the session store after logout.
//!
//! TRADE-OFFS
//! ==========
//! A full `location.href` assignment reloads the app, which re-runs session
//! restoration against the now-empty record. SSR and native builds no-op.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use session::Navigator;

/// [`Navigator`] that assigns `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.location().set_href(path) {
                    log::warn!("navigation to {path} failed: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("navigation to {path} skipped outside the browser");
        }
    }
}
