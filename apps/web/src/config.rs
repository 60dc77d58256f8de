use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, env_required, server::ServerConfig};
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// OAuth client credentials for the login flow
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub google_client_id: String,
    pub google_client_secret: String,
}

impl FromEnv for AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            google_client_id: env_required("GOOGLE_CLIENT_ID")?,
            google_client_secret: env_required("GOOGLE_CLIENT_SECRET")?,
        })
    }
}

/// Application configuration
///
/// Composes the shared config components from `core_config` and `database`
/// with the app-specific settings.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub auth: AuthConfig,
    /// Base public URL, used for OAuth redirects and shareable task links
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?;
        let auth = AuthConfig::from_env()?; // Required - will fail if not set
        let public_url = env_or_default("PUBLIC_URL", "http://localhost:8080");

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            auth,
            public_url,
        })
    }
}
