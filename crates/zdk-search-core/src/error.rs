use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration, raised before any remote call
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool arguments rejected by input validation
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The remote service call failed; `source` is the client's error
    #[error("Tool '{tool}' execution failed: {source}")]
    ToolFailed {
        tool: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use zdk_search_core::Error;
    /// let err = Error::config_error("No collection configured");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for creating parameter validation errors
    ///
    /// # Example
    /// ```
    /// use zdk_search_core::Error;
    /// let err = Error::invalid_parameter("limit", "must be between 1 and 100");
    /// ```
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Helper for wrapping a remote failure
    pub fn tool_failed<E>(tool: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::ToolFailed {
            tool: tool.into(),
            source: anyhow::Error::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::config_error("API key missing");
        assert_eq!(err.to_string(), "Configuration error: API key missing");

        let err = Error::invalid_parameter("query", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'query': must not be empty"
        );
    }

    #[test]
    fn test_tool_failed_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::tool_failed("search", io);

        assert!(err.to_string().starts_with("Tool 'search' execution failed"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "refused");
    }
}
