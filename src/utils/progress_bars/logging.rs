// src/utils/progress_bars/logging.rs - Logging helpers shared by the matchers
use log::{debug, info};
use std::time::Instant;

use crate::models::matching::{FieldScore, MatchOutcome, NameRule};
use crate::models::stats_models::{BatchSummary, MatchMethodType};

#[derive(Clone)]
pub struct MatchingLogger {
    method_name: &'static str,
    method_emoji: &'static str,
    start_time: Instant,
}

impl MatchingLogger {
    pub fn new(method_type: MatchMethodType) -> Self {
        let (method_name, method_emoji) = match method_type {
            MatchMethodType::Name => ("NAME", "👤"),
            MatchMethodType::Address => ("ADDRESS", "📍"),
            MatchMethodType::Uid => ("UID", "🆔"),
        };

        Self {
            method_name,
            method_emoji,
            start_time: Instant::now(),
        }
    }

    pub fn log_rules_fired(&self, fired: &[NameRule]) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let names: Vec<&str> = fired.iter().map(|r| r.as_str()).collect();
        debug!(
            "[{}] {} Rules fired: {} [{}]",
            self.method_name,
            self.method_emoji,
            fired.len(),
            names.join(", ")
        );
    }

    pub fn log_token_similarity(&self, token_score: f64, pincode_match: bool, cutoff: f64) {
        debug!(
            "[{}] {} Token similarity {:.2} (cutoff {:.2}), pincode match: {}",
            self.method_name, self.method_emoji, token_score, cutoff, pincode_match
        );
    }

    pub fn log_component_scores(&self, scores: &[FieldScore], final_score: f64) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        let parts: Vec<String> = scores
            .iter()
            .map(|s| format!("{}={:.1}", s.component.label(), s.value))
            .collect();
        debug!(
            "[{}] {} Components: {} → {:.2}",
            self.method_name,
            self.method_emoji,
            parts.join(", "),
            final_score
        );
    }

    /// Milliseconds since the logger was created.
    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }

    /// Create the logger before the match runs; the outcome line carries
    /// the time taken since then.
    pub fn log_outcome(&self, outcome: &MatchOutcome) {
        debug!(
            "[{}] {} Outcome: {} [+{:.3}ms]",
            self.method_name,
            self.method_emoji,
            outcome,
            self.elapsed_ms()
        );
    }
}

/// Batch-level logging for the verification binaries.
pub fn log_batch_start(run_id: &str, total_cases: usize, mode: &str, cutoff: f64) {
    info!(
        "🚀 Starting verification run {} ({} cases, mode: {}, address cutoff: {:.1})",
        run_id, total_cases, mode, cutoff
    );
}

pub fn log_batch_complete(run_id: &str, summary: &BatchSummary, elapsed_secs: f64) {
    info!(
        "✅ Verification run {} complete: {}/{} matched ({:.1}%), mean overall {:.2} [{:.2}s]",
        run_id,
        summary.matched,
        summary.total,
        summary.match_rate() * 100.0,
        summary.mean_overall,
        elapsed_secs
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_elapsed_covers_work_since_creation() {
        let logger = MatchingLogger::new(MatchMethodType::Address);
        thread::sleep(Duration::from_millis(5));
        let first = logger.elapsed_ms();
        assert!(first >= 5.0, "elapsed {first}ms");
        logger.log_outcome(&MatchOutcome::Pass(true));
        assert!(logger.elapsed_ms() >= first);
    }
}
