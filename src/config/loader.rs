//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

use super::types::{
    parse_hex_color, AccessConfig, AppConfig, ExportConfig, InstitutionConfig, ServerConfig,
};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/academia/
/// ├── institution.yaml  # Name, brand colour, logos
/// ├── server.yaml       # Bind address, database URL, pool size
/// ├── export.yaml       # Column width, PDF print settings
/// └── access.yaml       # Bearer tokens and roles
/// ```
///
/// # Example
///
/// ```no_run
/// use academy_reports::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/academia")?;
/// println!("Institution: {}", loader.config().institution().name);
/// # Ok::<(), academy_reports::error::ReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or the
    /// brand colour is not a `#RRGGBB` value.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();

        let institution_path = path.join("institution.yaml");
        let institution = Self::load_yaml::<InstitutionConfig>(&institution_path)?;
        if parse_hex_color(&institution.primary_color).is_none() {
            return Err(ReportError::ConfigParseError {
                path: institution_path.display().to_string(),
                message: format!(
                    "primary_color '{}' is not a #RRGGBB value",
                    institution.primary_color
                ),
            });
        }

        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;

        let export_path = path.join("export.yaml");
        let export = Self::load_yaml::<ExportConfig>(&export_path)?;
        if export.column_width <= 0.0 {
            return Err(ReportError::ConfigParseError {
                path: export_path.display().to_string(),
                message: "column_width must be positive".to_string(),
            });
        }

        let access = Self::load_yaml::<AccessConfig>(&path.join("access.yaml"))?;

        Ok(Self {
            config: AppConfig::new(institution, server, export, access),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ReportResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessRole;

    fn config_path() -> &'static str {
        "./config/academia"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        let config = loader.config();
        assert_eq!(config.institution().name, "Academia de Formación Profesional");
        assert_eq!(config.institution().primary_rgb(), 0x1F4E79);
        assert_eq!(config.server().bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_pdf_margins_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let pdf = &loader.config().export().pdf;

        assert_eq!(pdf.page_format, "A4");
        assert_eq!(pdf.margin_top_mm, 20);
        assert_eq!(pdf.margin_bottom_mm, 20);
        assert_eq!(pdf.margin_left_mm, 15);
        assert_eq!(pdf.margin_right_mm, 15);
        assert!(pdf.print_background);
    }

    #[test]
    fn test_column_width_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config().export().column_width, 22.0);
    }

    #[test]
    fn test_access_tokens_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tokens = &loader.config().access().tokens;

        assert_eq!(tokens.get("dev-admin-token"), Some(&AccessRole::Admin));
        assert_eq!(tokens.get("dev-staff-token"), Some(&AccessRole::Staff));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(ReportError::ConfigNotFound { path }) => {
                assert!(path.contains("institution.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_database_url_override() {
        let mut config = ConfigLoader::load(config_path()).unwrap().into_config();
        config.set_database_url("postgres://otro/academia");
        assert_eq!(config.server().database_url, "postgres://otro/academia");
    }
}
