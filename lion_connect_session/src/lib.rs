//! lion-connect-session - Client session subsystem for Lion Connect
//!
//! This crate owns the authentication state of a Lion Connect client
//! process: the in-memory access token, the persisted user record, the
//! role cookie mirrored for request-time route gating, and the
//! once-per-process session recovery that turns the durable refresh
//! credential into a fresh token.
//!
//! The in-memory session is the single source of truth; the role cookie
//! and the durable user record are derived, best-effort hints that never
//! carry authority.

mod api;
mod config;
mod coordination;
mod session;
mod storage;
mod utils;

#[cfg(test)]
mod test_utils;

// The auth operations and their context object
pub use coordination::{AuthContext, CoordinationError, LoginCredentials};

// Session state and the role cookie synchronizer
pub use session::{
    Session, SessionError, SessionStore, SessionUser, clear_roles_cookie, read_roles_cookie,
    set_roles_cookie,
};

// Backend operations and their error taxonomy
pub use api::{ApiError, ApiUser, AuthApi, FieldError, HttpAuthApi, LoginOutcome, SignupRequest, TokenGrant};

// Durable client storage
pub use storage::{ClientStore, StorageError, StoreData, build_client_store, client_store_from_env};

// Re-export the configuration statics adapters need
pub use config::{LC_API_BASE_URL, LC_ROLES_COOKIE_MAX_AGE, LC_ROLES_COOKIE_NAME};
