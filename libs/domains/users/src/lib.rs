//! Users Domain
//!
//! Transient identity for the web app: who the current visitor is, resolved
//! from the cookie session, and the OAuth flow that puts them there. Nothing
//! here is persisted; the session provider is the source of truth.

pub mod error;
pub mod handlers;
pub mod models;
pub mod oauth;
pub mod session;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::{AuthState, auth_router};
pub use models::SessionUser;
pub use oauth::google::GoogleProvider;
pub use oauth::providers::OAuthProvider;
pub use session::{CurrentUser, MaybeUser};
