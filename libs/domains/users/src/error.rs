use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("OAuth error: {0}")]
    OAuth(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<tower_sessions::session::Error> for UserError {
    fn from(err: tower_sessions::session::Error) -> Self {
        UserError::Session(err.to_string())
    }
}
