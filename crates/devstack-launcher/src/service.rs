//! Spawn-spec building for the two services.
//!
//! Translates the config sections into [`SpawnSpec`]s. The backend carries
//! the Flask development overlay the original launcher scripts set; the
//! frontend only gets its PORT.

use std::path::PathBuf;

use devstack_common::Service;
use devstack_process::{overlay, EnvMap, SpawnSpec};

use crate::config::{BackendConfig, FrontendConfig};

/// Builds the backend spawn spec from its config section.
///
/// Overlay on top of `base`:
/// - `FLASK_APP` = entry file
/// - `FLASK_ENV` = `development`
/// - `FLASK_DEBUG` = `1`
/// - `PYTHONUNBUFFERED` = `1`
/// - `PORT` = configured backend port
pub fn backend_spec(config: &BackendConfig, base: &EnvMap) -> SpawnSpec {
    let mut overrides = EnvMap::new();
    overrides.insert("FLASK_APP".to_string(), config.entry.clone());
    overrides.insert("FLASK_ENV".to_string(), "development".to_string());
    overrides.insert("FLASK_DEBUG".to_string(), "1".to_string());
    overrides.insert("PYTHONUNBUFFERED".to_string(), "1".to_string());
    overrides.insert("PORT".to_string(), config.port.to_string());

    SpawnSpec {
        service: Service::Backend,
        program: config.interpreter.clone(),
        args: vec![config.entry.clone()],
        working_directory: Some(PathBuf::from(&config.directory)),
        environment: overlay(base, &overrides),
    }
}

/// Builds the frontend spawn spec from its config section.
///
/// Overlay on top of `base`: `PORT` = configured frontend port.
pub fn frontend_spec(config: &FrontendConfig, base: &EnvMap) -> SpawnSpec {
    let mut overrides = EnvMap::new();
    overrides.insert("PORT".to_string(), config.port.to_string());

    SpawnSpec {
        service: Service::Frontend,
        program: config.package_manager.clone(),
        args: vec![config.start_command.clone()],
        working_directory: Some(PathBuf::from(&config.directory)),
        environment: overlay(base, &overrides),
    }
}
