use thiserror::Error;

/// Failure of a single API call.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    #[error("response read error: {0}")]
    Read(#[source] reqwest::Error),
    /// Non-2xx status with an `erro` body, shown verbatim.
    #[error("{0}")]
    Server(String),
    #[error("unknown server error")]
    UnknownServer,
    #[error("JSON decode error: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Server,
    UnknownServer,
    Malformed,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Request(_) | ApiError::Read(_) => ErrorKind::Network,
            ApiError::Server(_) => ErrorKind::Server,
            ApiError::UnknownServer => ErrorKind::UnknownServer,
            ApiError::MalformedResponse(_) => ErrorKind::Malformed,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_verbatim() {
        let err = ApiError::Server(String::from("ano inválido"));
        assert_eq!(err.to_string(), "ano inválido");
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn decode_failure_is_malformed() {
        let err: ApiError = serde_json::from_str::<u8>("not json").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Malformed);
        assert!(err.to_string().starts_with("JSON decode error: "));
    }

    #[test]
    fn unknown_server_error_text() {
        assert_eq!(ApiError::UnknownServer.to_string(), "unknown server error");
    }
}
