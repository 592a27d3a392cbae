//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth form surfaces. They hold no submission logic:
//! values, errors, and the busy flag all come in as signals from the page.

pub mod form_alert;
pub mod social_buttons;
pub mod text_field;
