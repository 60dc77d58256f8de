//! OAuth login flow: redirect out, handle the callback, sign out.
//!
//! Every failure path ends in a redirect to `/` with the error logged;
//! visitors never see an error page for an authentication problem.

use axum::{
    Router,
    extract::{Query, State},
    response::Redirect,
    routing::get,
};
use oauth2::{CsrfToken, PkceCodeChallenge};
use std::sync::Arc;
use tower_sessions::Session;

use crate::models::SessionUser;
use crate::oauth::providers::OAuthProvider;
use crate::oauth::types::{OAuthCallbackParams, OAuthState};
use crate::session::{sign_in, sign_out};

const SESSION_OAUTH_KEY: &str = "oauth_state";

/// State for the auth routes
#[derive(Clone)]
pub struct AuthState {
    pub provider: Arc<dyn OAuthProvider>,
    /// Base public URL the callback redirect_uri is built from
    pub public_url: String,
}

impl AuthState {
    pub fn new(provider: Arc<dyn OAuthProvider>, public_url: impl Into<String>) -> Self {
        Self {
            provider,
            public_url: public_url.into(),
        }
    }

    fn redirect_uri(&self) -> String {
        format!("{}/auth/callback", self.public_url.trim_end_matches('/'))
    }
}

/// Create the auth routes
pub fn auth_router(state: AuthState) -> Router {
    Router::new()
        .route("/auth/login", get(login))
        .route("/auth/callback", get(callback))
        .route("/auth/logout", get(logout))
        .with_state(state)
}

/// Start the login flow: stash CSRF state + PKCE verifier in the session
/// and redirect to the provider.
pub async fn login(State(state): State<AuthState>, session: Session) -> Redirect {
    let csrf = CsrfToken::new_random();
    let (_, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

    let oauth_state = OAuthState {
        state: csrf.secret().clone(),
        pkce_verifier: pkce_verifier.secret().clone(),
        redirect_uri: state.redirect_uri(),
    };

    if let Err(e) = session.insert(SESSION_OAUTH_KEY, &oauth_state).await {
        tracing::error!("Failed to store OAuth state in session: {}", e);
        return Redirect::to("/");
    }

    match state.provider.authorize_url(
        &oauth_state.state,
        &oauth_state.pkce_verifier,
        &oauth_state.redirect_uri,
    ) {
        Ok(url) => Redirect::to(&url),
        Err(e) => {
            tracing::error!("Failed to build authorize URL: {}", e);
            Redirect::to("/")
        }
    }
}

/// Provider callback: verify CSRF state, exchange the code, resolve the
/// identity, and open the session.
pub async fn callback(
    State(state): State<AuthState>,
    session: Session,
    Query(params): Query<OAuthCallbackParams>,
) -> Redirect {
    let (Some(code), Some(callback_state)) = (params.code, params.state) else {
        tracing::warn!("OAuth callback without code/state parameters");
        return Redirect::to("/");
    };

    let oauth_state: OAuthState = match session.remove(SESSION_OAUTH_KEY).await {
        Ok(Some(stored)) => stored,
        Ok(None) => {
            tracing::warn!("OAuth callback without a pending login");
            return Redirect::to("/");
        }
        Err(e) => {
            tracing::error!("Failed to read OAuth state from session: {}", e);
            return Redirect::to("/");
        }
    };

    if callback_state != oauth_state.state {
        tracing::warn!("OAuth callback with mismatched state");
        return Redirect::to("/");
    }

    let token = match state
        .provider
        .exchange_code(&code, &oauth_state.pkce_verifier, &oauth_state.redirect_uri)
        .await
    {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("OAuth code exchange failed: {}", e);
            return Redirect::to("/");
        }
    };

    let info = match state.provider.get_user_info(&token.access_token).await {
        Ok(info) => info,
        Err(e) => {
            tracing::error!("Failed to fetch user info: {}", e);
            return Redirect::to("/");
        }
    };

    let user = match SessionUser::try_from(info) {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Unusable identity from provider: {}", e);
            return Redirect::to("/");
        }
    };

    if let Err(e) = sign_in(&session, &user).await {
        tracing::error!("Failed to persist session: {}", e);
        return Redirect::to("/");
    }

    Redirect::to("/dashboard")
}

/// End the session and return to the landing page.
pub async fn logout(session: Session) -> Redirect {
    if let Err(e) = sign_out(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }
    Redirect::to("/")
}
