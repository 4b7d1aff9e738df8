// src/utils/env.rs
use log::{debug, info, warn};
use std::path::Path;

const ENV_PATHS: [&str; 3] = [".env", ".env.local", "../.env"];

/// Loads the first env file found in `ENV_PATHS`. Variables already set in
/// the process environment win over file values.
pub fn load_env() -> bool {
    for path in ENV_PATHS.iter() {
        if !Path::new(path).exists() {
            continue;
        }
        match dotenv::from_path(path) {
            Ok(()) => {
                info!("Loaded environment variables from {}", path);
                return true;
            }
            Err(e) => warn!("Failed to load environment from {}: {}", path, e),
        }
    }
    info!("No .env file found, using process environment only");
    false
}

/// Installs the `env_logger` backend, then loads the env file so its
/// messages are emitted. A logger that is already installed is kept.
pub fn init_logging() -> bool {
    if env_logger::try_init().is_err() {
        debug!("Logger already initialised");
    }
    load_env()
}
