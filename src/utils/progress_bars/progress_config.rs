// src/utils/progress_bars/progress_config.rs

use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::env;
use std::time::Duration;

/// Configuration for progress tracking during batch verification
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Whether to show progress bars at all
    pub enabled: bool,
    /// Refresh rate for progress bars in milliseconds
    pub refresh_rate_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_rate_ms: 100,
        }
    }
}

impl ProgressConfig {
    /// Create progress configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env::var("PROGRESS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(defaults.enabled),
            refresh_rate_ms: env::var("PROGRESS_REFRESH_RATE_MS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(defaults.refresh_rate_ms),
        }
    }

    /// Create a progress bar over `len` cases if progress is enabled, None otherwise
    pub fn create_bar(&self, len: u64) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }

        let pb = ProgressBar::new(len);
        match ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  ")),
            Err(e) => warn!("Invalid progress bar template, using default style: {}", e),
        }
        pb.enable_steady_tick(Duration::from_millis(self.refresh_rate_ms.max(1)));
        Some(pb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProgressConfig::default();
        assert!(config.enabled);
        assert_eq!(config.refresh_rate_ms, 100);
    }

    #[test]
    fn test_bar_creation() {
        let mut config = ProgressConfig::default();

        config.enabled = false;
        assert!(config.create_bar(10).is_none());

        config.enabled = true;
        let pb = config.create_bar(10).unwrap();
        assert_eq!(pb.length(), Some(10));
        pb.finish_and_clear();
    }
}
