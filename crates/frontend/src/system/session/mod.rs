//! Per-mount session bootstrap: Telegram SDK script, platform user, main button and the
//! application user fetched from the backend.

pub mod bootstrap;
pub mod hook;
pub mod state;

pub use hook::use_session_bootstrap;
pub use state::{MountFlag, PlatformStatus, SessionState};
