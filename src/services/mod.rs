//! Typed REST resource services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrappers that map one call to one endpoint. They never touch session
//! state; the session store decides what a response means.

pub mod auth;
pub mod department;
pub mod enterprise;

pub use auth::{AuthApi, HttpAuthApi};
pub use department::DepartmentService;
pub use enterprise::EnterpriseService;
