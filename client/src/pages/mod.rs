//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its submission controller,
//! redirects, session refresh) and delegates rendering details to
//! `components`.

pub mod home;
pub mod sign_in;
pub mod sign_up;
