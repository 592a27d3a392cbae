//! Email/password authentication submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `schema` validates raw input, `forms` binds each screen to its schema and
//! backend operation, `controller` owns the per-form state machine, `outcome`
//! turns a success into navigation, `backend` defines the identity-provider
//! seam, and `flow` drives one submit end to end.

pub mod backend;
pub mod controller;
pub mod flow;
pub mod forms;
pub mod outcome;
pub mod schema;
