use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API responded with status {status} for `{path}`")]
    Status { status: u16, path: String },

    #[error("Malformed API payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ApiError {
    /// True for failures worth telling the visitor to try again later
    /// (transport errors and 5xx responses).
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Http(_) => true,
            ApiError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        let err = ApiError::Status {
            status: 503,
            path: "home".into(),
        };
        assert!(err.is_transient());
        assert_eq!(
            err.to_string(),
            "API responded with status 503 for `home`"
        );
    }

    #[test]
    fn client_errors_are_not_transient() {
        let err = ApiError::Status {
            status: 422,
            path: "leasing-application-forms".into(),
        };
        assert!(!err.is_transient());
        assert!(!ApiError::Config {
            message: "missing".into()
        }
        .is_transient());
    }
}
