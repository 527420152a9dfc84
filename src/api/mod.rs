//! HTTP API for the academy report service.
//!
//! Admin-only endpoints that export the fixed reports as Excel or PDF and
//! serve the listados as JSON or an interactive HTML page.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportParams;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
