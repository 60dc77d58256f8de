use serde::{Deserialize, Serialize};

/// Identity attributes returned by an OAuth provider's userinfo endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthUserInfo {
    pub provider_user_id: String,
    pub email: Option<String>,
    pub email_verified: bool,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub raw_data: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
    pub token_type: String,
}

/// CSRF state and PKCE verifier held in the session between the redirect to
/// the provider and the callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthState {
    pub state: String,
    pub pkce_verifier: String,
    pub redirect_uri: String,
}

/// Query parameters on the provider callback; both are absent when the
/// provider reports an error instead of a code.
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthCallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}
