//! Error types and exit codes for pathgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (missing node or edge, broken path, no path)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - lookup or search failed (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("broken path: no edge between {from} and {to}")]
    BrokenPath { from: String, to: String },

    #[error("no path found from {from} to {to}")]
    Unreachable { from: String, to: String },

    // Usage errors (exit code 2)
    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an error for a node that is not in the graph
    pub fn node_not_found(id: impl std::fmt::Display) -> Self {
        GraphError::NodeNotFound { id: id.to_string() }
    }

    /// Create an error for a missing half-edge
    pub fn edge_not_found(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        GraphError::EdgeNotFound {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a path with a non-adjacent consecutive pair
    pub fn broken_path(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        GraphError::BrokenPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for a search that exhausted its frontier
    pub fn unreachable(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        GraphError::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// True for the "not found" class of lookup failures
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::NodeNotFound { .. } | GraphError::EdgeNotFound { .. }
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::InvalidValue { .. } | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::NodeNotFound { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::BrokenPath { .. }
            | GraphError::Unreachable { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Toml(_) | GraphError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::BrokenPath { .. } => "broken_path",
            GraphError::Unreachable { .. } => "unreachable",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        // Endpoints are reported separately so scripts don't have to parse the message
        match self {
            GraphError::EdgeNotFound { from, to }
            | GraphError::BrokenPath { from, to }
            | GraphError::Unreachable { from, to } => {
                error_obj["from"] = serde_json::json!(from);
                error_obj["to"] = serde_json::json!(to);
            }
            GraphError::NodeNotFound { id } => {
                error_obj["id"] = serde_json::json!(id);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for pathgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            GraphError::node_not_found("a").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::unreachable("a", "b").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            GraphError::invalid_value("cost", -1.0).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(i32::from(ExitCode::Failure), 1);
    }

    #[test]
    fn test_not_found_class() {
        assert!(GraphError::node_not_found("a").is_not_found());
        assert!(GraphError::edge_not_found("a", "b").is_not_found());
        assert!(!GraphError::broken_path("a", "b").is_not_found());
        assert!(!GraphError::unreachable("a", "b").is_not_found());
    }

    #[test]
    fn test_unreachable_json_reports_endpoints() {
        let json = GraphError::unreachable("s", "z").to_json();
        assert_eq!(json["error"]["type"], "unreachable");
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["from"], "s");
        assert_eq!(json["error"]["to"], "z");
        assert_eq!(json["error"]["message"], "no path found from s to z");
    }
}
