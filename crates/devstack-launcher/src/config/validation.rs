use super::*;
use anyhow::{anyhow, Result};

/// Validate the complete configuration.
pub fn validate_config(config: &LauncherConfig) -> Result<()> {
    validate_launcher_options(&config.launcher)?;
    validate_backend_config(&config.backend)?;
    validate_frontend_config(&config.frontend)?;

    Ok(())
}

/// Validate launcher-wide options.
fn validate_launcher_options(options: &LauncherOptions) -> Result<()> {
    match options.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(anyhow!(
            "Invalid log level: {}, must be one of: trace, debug, info, warn, error",
            options.log_level
        )),
    }
}

/// Validate the backend section.
fn validate_backend_config(backend: &BackendConfig) -> Result<()> {
    if backend.directory.is_empty() {
        return Err(anyhow!("Backend directory cannot be empty"));
    }

    if backend.interpreter.is_empty() {
        return Err(anyhow!("Backend interpreter cannot be empty"));
    }

    if backend.entry.is_empty() {
        return Err(anyhow!("Backend entry file cannot be empty"));
    }

    validate_port("Backend", backend.port)?;

    Ok(())
}

/// Validate the frontend section.
fn validate_frontend_config(frontend: &FrontendConfig) -> Result<()> {
    if frontend.directory.is_empty() {
        return Err(anyhow!("Frontend directory cannot be empty"));
    }

    if frontend.package_manager.is_empty() {
        return Err(anyhow!("Frontend package manager cannot be empty"));
    }

    if frontend.start_command.is_empty() {
        return Err(anyhow!("Frontend start command cannot be empty"));
    }

    validate_port("Frontend", frontend.port)?;

    Ok(())
}

fn validate_port(section: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(anyhow!(
            "{} port must be between 1 and 65535, got: {}",
            section,
            port
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        LauncherConfig::default().validate().unwrap();
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let mut config = LauncherConfig::default();
        config.backend.port = 0;
        assert!(config.validate().is_err());

        let mut config = LauncherConfig::default();
        config.frontend.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_programs_are_rejected() {
        let mut config = LauncherConfig::default();
        config.backend.interpreter.clear();
        assert!(config.validate().is_err());

        let mut config = LauncherConfig::default();
        config.frontend.package_manager.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_directories_are_rejected() {
        let mut config = LauncherConfig::default();
        config.backend.directory.clear();
        assert!(config.validate().is_err());

        let mut config = LauncherConfig::default();
        config.frontend.directory.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let mut config = LauncherConfig::default();
        config.launcher.log_level = "verbose".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
