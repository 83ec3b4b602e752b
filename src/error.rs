//! Error types for client construction and dispatch

use thiserror::Error;

/// Error type for client operations
#[derive(Debug, Error)]
pub enum IpmiError {
    /// Malformed or missing operation arguments, an unknown action name,
    /// or a failed cross-reference check
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Construction-time failure; no client is produced
    #[error("construction failed: {0}")]
    Construction(String),

    /// The external process could not be run, or exited nonzero with no
    /// output to parse
    #[error("execution failed: {detail}")]
    Execution {
        /// Exit status of the process, when it ran at all
        status: Option<i32>,
        /// Spawn error or captured stderr
        detail: String,
    },
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, IpmiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IpmiError::InvalidArgument("Invalid Chassis Command".to_string());
        assert_eq!(err.to_string(), "invalid argument: Invalid Chassis Command");

        let err = IpmiError::Construction("Host is required".to_string());
        assert_eq!(err.to_string(), "construction failed: Host is required");

        let err = IpmiError::Execution {
            status: Some(1),
            detail: "Unable to establish IPMI v2 / RMCP+ session".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "execution failed: Unable to establish IPMI v2 / RMCP+ session"
        );
    }
}
