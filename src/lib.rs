//! Client core for the Themplus management API.
//!
//! ARCHITECTURE
//! ============
//! - `session`: authenticated identity, bearer token and the use-cases that change them
//! - `net`: HTTP client, bearer interceptor and wire types
//! - `services`: typed wrappers over the auth, department and enterprise endpoints
//! - `router`: named page routes and the admin guard
//! - `storage` / `notify`: persistence and notification collaborators
//! - `state`: explicit wiring of all of the above

pub mod config;
pub mod error;
pub mod net;
pub mod notify;
pub mod router;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;

pub use config::ClientConfig;
pub use error::ApiError;
pub use session::{Session, SessionStore};
pub use state::AppState;
