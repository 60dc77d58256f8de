use core_config::Environment;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Create the cookie session layer.
///
/// Sessions are held in process memory and expire after 7 days of
/// inactivity. The cookie is marked Secure in production.
pub fn create_session_layer(environment: &Environment) -> SessionManagerLayer<MemoryStore> {
    let session_store = MemoryStore::default();

    SessionManagerLayer::new(session_store)
        .with_secure(environment.use_https())
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
