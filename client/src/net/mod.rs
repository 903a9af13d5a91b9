//! Networking modules for the REST collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and decodes the `{success, data}` envelope;
//! `types` defines the shared wire schema and the error taxonomy.

pub mod api;
pub mod types;
