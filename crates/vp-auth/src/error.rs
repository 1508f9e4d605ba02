use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("session store error: {0}")]
    SessionStoreError(String),

    #[error("credential directory error: {0}")]
    DirectoryError(String),

    #[error("{0}")]
    Other(String),
}
