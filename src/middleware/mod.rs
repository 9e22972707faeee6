pub mod auth;
pub mod session;

pub use auth::{RequireSession, redirect_found};
pub use session::{SESSION_COOKIE, SessionUser};
