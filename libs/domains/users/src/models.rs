use serde::{Deserialize, Serialize};

use crate::error::UserError;
use crate::oauth::types::OAuthUserInfo;

/// The authenticated identity attached to the current browser visit.
///
/// Provider-issued, held only in the cookie session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl TryFrom<OAuthUserInfo> for SessionUser {
    type Error = UserError;

    /// Requires a verified-enough identity: the provider must return an
    /// email. The display name falls back to the email's local part.
    fn try_from(info: OAuthUserInfo) -> Result<Self, Self::Error> {
        let email = info
            .email
            .ok_or_else(|| UserError::OAuth("provider returned no email".to_string()))?;

        let name = info
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or(&email).to_string());

        Ok(Self {
            email,
            name,
            avatar_url: info.avatar_url,
        })
    }
}
