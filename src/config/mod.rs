//! Configuration loading and management for the report service.
//!
//! Configuration lives in a directory of YAML files covering institution
//! branding, the HTTP server and database, export styling and access tokens.
//!
//! # Example
//!
//! ```no_run
//! use academy_reports::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/academia").unwrap();
//! println!("Brand colour: {}", config.config().institution().primary_color);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    parse_hex_color, AccessConfig, AccessRole, AppConfig, ExportConfig, InstitutionConfig,
    PdfConfig, ServerConfig,
};
