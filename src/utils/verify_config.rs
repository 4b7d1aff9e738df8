// src/utils/verify_config.rs
use log::{debug, info, warn};
use std::env;

use crate::models::core::MatchMode;
use crate::utils::constants::DEFAULT_ADDRESS_CUTOFF;

/// Defaults for verification runs, overridable from the environment and the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyConfig {
    pub mode: MatchMode,
    pub address_cutoff: f64,
    pub include_breakdown: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Pass,
            address_cutoff: DEFAULT_ADDRESS_CUTOFF,
            include_breakdown: false,
        }
    }
}

impl VerifyConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let mode = match env::var("VERIFY_MODE") {
            Ok(raw) => raw.parse::<MatchMode>().unwrap_or_else(|e| {
                warn!("Ignoring VERIFY_MODE: {}", e);
                defaults.mode
            }),
            Err(_) => defaults.mode,
        };

        let address_cutoff = match env::var("ADDRESS_CUTOFF") {
            Ok(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    warn!("Ignoring ADDRESS_CUTOFF={:?}: not a finite number", raw);
                    defaults.address_cutoff
                }
            },
            Err(_) => defaults.address_cutoff,
        };

        let include_breakdown = env::var("VERIFY_INCLUDE_BREAKDOWN")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(defaults.include_breakdown);

        debug!(
            "Verify config: mode={}, cutoff={}, breakdown={}",
            mode, address_cutoff, include_breakdown
        );

        Self {
            mode,
            address_cutoff,
            include_breakdown,
        }
    }

    /// Log the current configuration
    pub fn log_config(&self) {
        info!("🔍 Verification mode: {}", self.mode);
        info!("   Address cutoff: {:.1}", self.address_cutoff);
        if self.mode == MatchMode::Score {
            info!(
                "   Address breakdown: {}",
                if self.include_breakdown { "included" } else { "omitted" }
            );
        }
    }
}
