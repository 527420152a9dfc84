//! Shared application state for the report API.

use std::sync::Arc;

use crate::auth::AdminAuth;
use crate::config::AppConfig;
use crate::query::ReportSource;
use crate::render::PdfEngine;

/// Shared application state.
///
/// Holds the collaborators every handler needs. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    source: Arc<dyn ReportSource>,
    pdf: Arc<dyn PdfEngine>,
    auth: Arc<dyn AdminAuth>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates the state from its collaborators.
    pub fn new(
        source: Arc<dyn ReportSource>,
        pdf: Arc<dyn PdfEngine>,
        auth: Arc<dyn AdminAuth>,
        config: AppConfig,
    ) -> Self {
        Self {
            source,
            pdf,
            auth,
            config: Arc::new(config),
        }
    }

    /// The report data source.
    pub fn source(&self) -> &dyn ReportSource {
        self.source.as_ref()
    }

    /// The PDF engine.
    pub fn pdf(&self) -> &dyn PdfEngine {
        self.pdf.as_ref()
    }

    /// The admin authoriser.
    pub fn auth(&self) -> &dyn AdminAuth {
        self.auth.as_ref()
    }

    /// The loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
