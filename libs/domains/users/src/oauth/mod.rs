pub mod google;
pub mod providers;
pub mod types;

pub use providers::OAuthProvider;
pub use types::{OAuthCallbackParams, OAuthState, OAuthUserInfo, TokenResponse};
