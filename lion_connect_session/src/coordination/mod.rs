//! Coordination of the session subsystem
//!
//! High-level operations binding the credential store, the role cookie
//! and the backend API together. `AuthContext` is the single entry point
//! consumers hold; the submodules split it by concern:
//! - `auth`: login, logout and signup
//! - `recovery`: the once-per-process session recovery procedure
//! - `errors`: the coordination error type

mod auth;
mod context;
mod errors;
mod recovery;

pub use auth::LoginCredentials;
pub use context::AuthContext;
pub use errors::CoordinationError;
