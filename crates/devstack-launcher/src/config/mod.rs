use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validation;

/// Top-level configuration structure.
///
/// Every field defaults to the values of the original launcher scripts,
/// so an absent config file means a fully usable configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    #[serde(default)]
    pub launcher: LauncherOptions,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

/// Launcher-wide options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LauncherOptions {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LauncherOptions {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Backend process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Working directory of the backend process.
    #[serde(default = "default_backend_directory")]
    pub directory: String,

    /// Python interpreter binary name.
    #[serde(default = "default_backend_interpreter")]
    pub interpreter: String,

    /// Application entry file, passed as the interpreter's single argument.
    #[serde(default = "default_backend_entry")]
    pub entry: String,

    /// PORT value handed to the backend.
    #[serde(default = "default_backend_port")]
    pub port: u16,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            directory: default_backend_directory(),
            interpreter: default_backend_interpreter(),
            entry: default_backend_entry(),
            port: default_backend_port(),
        }
    }
}

/// Frontend process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Working directory of the frontend process.
    #[serde(default = "default_frontend_directory")]
    pub directory: String,

    /// Package manager binary name.
    #[serde(default = "default_frontend_package_manager")]
    pub package_manager: String,

    /// Start subcommand handed to the package manager.
    #[serde(default = "default_frontend_start_command")]
    pub start_command: String,

    /// PORT value handed to the frontend.
    #[serde(default = "default_frontend_port")]
    pub port: u16,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            directory: default_frontend_directory(),
            package_manager: default_frontend_package_manager(),
            start_command: default_frontend_start_command(),
            port: default_frontend_port(),
        }
    }
}

impl LauncherConfig {
    /// Load configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::load_from_string(&content)
    }

    /// Load configuration from a YAML string.
    pub fn load_from_string(content: &str) -> Result<Self> {
        let config: LauncherConfig =
            serde_yaml::from_str(content).context("Failed to parse YAML configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_backend_directory() -> String {
    "backend".to_string()
}

fn default_backend_interpreter() -> String {
    "python3".to_string()
}

fn default_backend_entry() -> String {
    "app.py".to_string()
}

fn default_backend_port() -> u16 {
    8080
}

fn default_frontend_directory() -> String {
    "frontend".to_string()
}

fn default_frontend_package_manager() -> String {
    "npm".to_string()
}

fn default_frontend_start_command() -> String {
    "start".to_string()
}

fn default_frontend_port() -> u16 {
    8000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = LauncherConfig::default();

        assert_eq!(config.launcher.log_level, "info");
        assert_eq!(config.backend.directory, "backend");
        assert_eq!(config.backend.interpreter, "python3");
        assert_eq!(config.backend.entry, "app.py");
        assert_eq!(config.backend.port, 8080);
        assert_eq!(config.frontend.directory, "frontend");
        assert_eq!(config.frontend.package_manager, "npm");
        assert_eq!(config.frontend.start_command, "start");
        assert_eq!(config.frontend.port, 8000);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = LauncherConfig::load_from_string("{}").unwrap();
        assert_eq!(config.backend.port, 8080);
        assert_eq!(config.frontend.port, 8000);
    }

    #[test]
    fn test_partial_yaml_keeps_remaining_defaults() {
        let yaml = r#"
backend:
  interpreter: python3.12
  port: 9090
"#;
        let config = LauncherConfig::load_from_string(yaml).unwrap();

        assert_eq!(config.backend.interpreter, "python3.12");
        assert_eq!(config.backend.port, 9090);
        // Untouched sections keep their script defaults.
        assert_eq!(config.backend.directory, "backend");
        assert_eq!(config.frontend.package_manager, "npm");
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let result = LauncherConfig::load_from_string("backend: [not, a, map]");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let yaml = r#"
backend:
  port: 0
"#;
        let result = LauncherConfig::load_from_string(yaml);
        assert!(result.is_err());
    }
}
