//! Error types for the report service.
//!
//! Every stage of the pipeline (configuration, authentication, query,
//! rendering) reports failures through [`ReportError`]. The HTTP layer maps
//! each variant to exactly one status code.

use thiserror::Error;

/// The main error type for the report service.
///
/// # Example
///
/// ```
/// use academy_reports::error::ReportError;
///
/// let error = ReportError::UnsupportedFormat {
///     format: "csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported export format: csv");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds an invalid value.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The caller is not an authenticated administrator.
    #[error("Authorization failed ({status}): {message}")]
    Unauthorized {
        /// HTTP status chosen by the auth collaborator (401 or 403).
        status: u16,
        /// Message provided by the auth collaborator.
        message: String,
    },

    /// The requested export format is not one of `excel` or `pdf`.
    #[error("Unsupported export format: {format}")]
    UnsupportedFormat {
        /// The raw format value received.
        format: String,
    },

    /// The requested report type does not exist.
    #[error("Unknown report: {report}")]
    UnknownReport {
        /// The raw report identifier received.
        report: String,
    },

    /// An aggregation query failed. The whole report is aborted.
    #[error("Query failed: {source}")]
    Query {
        /// The database error.
        #[from]
        source: sqlx::Error,
    },

    /// Workbook, HTML or PDF generation failed.
    #[error("Render failed: {message}")]
    Render {
        /// A description of the rendering failure.
        message: String,
    },
}

impl ReportError {
    /// Creates a render error from anything displayable.
    pub fn render(message: impl std::fmt::Display) -> Self {
        ReportError::Render {
            message: message.to_string(),
        }
    }

    /// Returns true when the failure is on the server side (maps to a 500).
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ReportError::ConfigNotFound { .. }
                | ReportError::ConfigParseError { .. }
                | ReportError::Query { .. }
                | ReportError::Render { .. }
        )
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReportError::ConfigNotFound {
            path: "/missing/server.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/server.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ReportError::ConfigParseError {
            path: "/config/institution.yaml".to_string(),
            message: "invalid colour".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/institution.yaml': invalid colour"
        );
    }

    #[test]
    fn test_unauthorized_displays_status_and_message() {
        let error = ReportError::Unauthorized {
            status: 403,
            message: "Acceso denegado".to_string(),
        };
        assert_eq!(error.to_string(), "Authorization failed (403): Acceso denegado");
        assert!(!error.is_internal());
    }

    #[test]
    fn test_query_error_wraps_sqlx_error() {
        let error: ReportError = sqlx::Error::RowNotFound.into();
        assert!(error.to_string().starts_with("Query failed:"));
        assert!(error.is_internal());
    }

    #[test]
    fn test_render_helper_keeps_message() {
        let error = ReportError::render("browser exited with status 1");
        assert_eq!(error.to_string(), "Render failed: browser exited with status 1");
        assert!(error.is_internal());
    }

    #[test]
    fn test_client_errors_are_not_internal() {
        let format = ReportError::UnsupportedFormat {
            format: "csv".to_string(),
        };
        let report = ReportError::UnknownReport {
            report: "nominas".to_string(),
        };
        assert!(!format.is_internal());
        assert!(!report.is_internal());
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn fails() -> ReportResult<()> {
            Err(ReportError::render("boom"))
        }

        fn propagates() -> ReportResult<()> {
            fails()?;
            Ok(())
        }

        assert!(propagates().is_err());
    }
}
