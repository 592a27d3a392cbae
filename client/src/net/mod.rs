//! Networking modules for the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the auth backend over HTTP, `context` wires that client
//! into the component tree with the right lifetime, and `types` defines the
//! wire schema.

pub mod api;
pub mod context;
pub mod types;
