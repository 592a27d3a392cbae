//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only session state is app-wide. Per-form submission state lives with the
//! form that owns it (see `auth::controller`).

pub mod auth;
