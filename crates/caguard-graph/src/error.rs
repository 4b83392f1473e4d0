use thiserror::Error;

/// Session establishment failures. Fatal: the run aborts after teardown.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("session expired: the token endpoint refused to issue a token")]
    Expired,
    #[error("access denied by the directory service: {0}")]
    Denied(String),
    #[error("token endpoint unreachable: {0}")]
    Transport(String),
}

/// Policy fetch failures. Fatal: no partial fetch result is ever used.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("directory service unavailable: {0}")]
    RemoteUnavailable(String),
    #[error("session is no longer authenticated")]
    AuthExpired,
}
