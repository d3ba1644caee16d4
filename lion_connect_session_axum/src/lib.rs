//! Axum integration for the lion-connect-session subsystem: the
//! role-cookie route gate, a roles extractor and the HTTP surface for
//! the auth operations.

mod config;
mod error;
mod extract;
mod gate;
mod router;

pub use config::{LC_LOGIN_URL, LC_RETURN_TO_PARAM};
pub use extract::GateRoles;
pub use gate::{GateDecision, RouteGate, role_gate};
pub use router::session_router;

// Re-export the pieces applications wire up alongside this crate
pub use lion_connect_session::{AuthContext, LoginCredentials, Session, SessionUser};
