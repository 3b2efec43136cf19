//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read the session through context and never own app-wide state.

pub mod auth_guard;
pub mod identity_badge;
pub mod left_sidebar_nav;
