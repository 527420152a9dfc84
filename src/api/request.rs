//! Query-string parameters of the report endpoints.

use std::collections::HashMap;

use crate::models::{ReportFilters, ReportKind};

/// Raw query parameters of a report request.
#[derive(Debug, Clone, Default)]
pub struct ReportParams {
    params: HashMap<String, String>,
}

impl ReportParams {
    /// Wraps the decoded query string.
    pub fn new(params: HashMap<String, String>) -> Self {
        Self { params }
    }

    /// The raw `format` value, if sent.
    pub fn format(&self) -> Option<&str> {
        self.params.get("format").map(String::as_str)
    }

    /// The filters `kind` recognises.
    pub fn filters(&self, kind: ReportKind) -> ReportFilters {
        ReportFilters::from_query(kind, &self.params)
    }
}
