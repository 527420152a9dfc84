//! Configuration types for the report service.
//!
//! These structures are deserialized from the YAML files of a configuration
//! directory (see [`super::ConfigLoader`]).

use serde::Deserialize;
use std::collections::HashMap;

/// Institution branding used by every exported document.
#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionConfig {
    /// Institution display name, printed in document headers.
    pub name: String,
    /// Primary brand colour as `#RRGGBB`.
    pub primary_color: String,
    /// Logo shown on the left of the PDF header (URL or data URI).
    #[serde(default)]
    pub logo_left: String,
    /// Logo shown on the right of the PDF header (URL or data URI).
    #[serde(default)]
    pub logo_right: String,
}

impl InstitutionConfig {
    /// Returns the primary colour as a `0xRRGGBB` integer.
    ///
    /// The loader validates the colour, so this falls back to black only for
    /// hand-built configurations.
    pub fn primary_rgb(&self) -> u32 {
        parse_hex_color(&self.primary_color).unwrap_or(0)
    }
}

/// HTTP server and database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP server binds to.
    pub bind_address: String,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Maximum pooled database connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

/// PDF print settings for the headless browser.
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    /// Browser executable used for printing.
    pub browser_path: String,
    /// Paper format, e.g. `A4`.
    #[serde(default = "default_page_format")]
    pub page_format: String,
    /// Top margin in millimetres.
    pub margin_top_mm: u32,
    /// Bottom margin in millimetres.
    pub margin_bottom_mm: u32,
    /// Left margin in millimetres.
    pub margin_left_mm: u32,
    /// Right margin in millimetres.
    pub margin_right_mm: u32,
    /// Whether background colours are printed.
    #[serde(default = "default_true")]
    pub print_background: bool,
    /// Seconds to wait for the browser before giving up.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_page_format() -> String {
    "A4".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    60
}

/// Export settings from export.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Width applied uniformly to every worksheet column.
    pub column_width: f64,
    /// PDF settings.
    pub pdf: PdfConfig,
}

/// Role attached to an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRole {
    /// Full access to the report endpoints.
    Admin,
    /// Authenticated, but not allowed to export reports.
    Staff,
}

/// Access tokens from access.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Map of bearer token to role.
    pub tokens: HashMap<String, AccessRole>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct AppConfig {
    institution: InstitutionConfig,
    server: ServerConfig,
    export: ExportConfig,
    access: AccessConfig,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(
        institution: InstitutionConfig,
        server: ServerConfig,
        export: ExportConfig,
        access: AccessConfig,
    ) -> Self {
        Self {
            institution,
            server,
            export,
            access,
        }
    }

    /// Returns the institution branding.
    pub fn institution(&self) -> &InstitutionConfig {
        &self.institution
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the export settings.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns the access tokens.
    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Overrides the database URL (used for the `DATABASE_URL` variable).
    pub fn set_database_url(&mut self, url: impl Into<String>) {
        self.server.database_url = url.into();
    }

    /// Overrides the bind address.
    pub fn set_bind_address(&mut self, addr: impl Into<String>) {
        self.server.bind_address = addr.into();
    }
}

/// Parses a `#RRGGBB` colour into a `0xRRGGBB` integer.
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}
