use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; `message` is already normalized for display.
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ApiError {
    /// HTTP status of a failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Transport(e) if e.is_timeout() => "The server took too long to respond".to_string(),
            ApiError::Transport(e) if e.is_connect() => "Could not reach the server".to_string(),
            ApiError::Transport(_) => "Network request failed".to_string(),
            ApiError::Parse(_) => "The server sent an unexpected response".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_message_only() {
        let err = ApiError::Http {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_friendly_message(), "not found");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Http {
            status: 401,
            message: "HTTP 401".to_string(),
        };
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = ApiError::Config {
            message: "missing base_url".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Configuration error: missing base_url");
    }
}
