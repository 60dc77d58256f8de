//! Session storage and request extractors for the current identity.
//!
//! Protected pages take [`CurrentUser`]; its rejection is a non-permanent
//! redirect to `/`, never an error page. Pages that merely adapt to the
//! visitor take [`MaybeUser`], which never rejects. A session that fails to
//! load is treated as "no session".

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use tower_sessions::Session;

use crate::error::UserResult;
use crate::models::SessionUser;

const SESSION_USER_KEY: &str = "user";

/// Store the signed-in identity in the session.
pub async fn sign_in(session: &Session, user: &SessionUser) -> UserResult<()> {
    session.insert(SESSION_USER_KEY, user).await?;
    tracing::info!(email = %user.email, "User signed in");
    Ok(())
}

/// Clear the session entirely.
pub async fn sign_out(session: &Session) -> UserResult<()> {
    session.flush().await?;
    Ok(())
}

/// Read the signed-in identity, if any.
pub async fn load_user(session: &Session) -> UserResult<Option<SessionUser>> {
    Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
}

/// Extractor for pages that require an authenticated identity.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::temporary("/"))?;

        match load_user(&session).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err(Redirect::temporary("/")),
            Err(e) => {
                tracing::warn!("Failed to load session, treating as unauthenticated: {}", e);
                Err(Redirect::temporary("/"))
            }
        }
    }
}

/// Extractor for pages that render with or without an identity.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<SessionUser>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(session) = Session::from_request_parts(parts, state).await else {
            return Ok(MaybeUser(None));
        };

        Ok(MaybeUser(load_user(&session).await.unwrap_or_default()))
    }
}
