//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only app-wide state is the session (`auth`); everything else is
//! page-local signals.

pub mod auth;
