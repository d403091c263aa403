//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` dispatches requests through an ordered hook list, `interceptor`
//! provides the bearer-token hook, and `types` defines the wire schema.

pub mod client;
pub mod interceptor;
pub mod types;
