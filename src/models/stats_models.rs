// src/models/stats_models.rs
use serde::{Deserialize, Serialize};

/// The three matchers that feed the aggregate verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethodType {
    Name,
    Address,
    Uid,
}

impl MatchMethodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethodType::Name => "name",
            MatchMethodType::Address => "address",
            MatchMethodType::Uid => "uid",
        }
    }
}

/// Aggregate figures over a batch of verification cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub matched: usize,
    /// Mean overall score on the [0, 100] scale (pass-mode verdicts count as 100 or 0).
    pub mean_overall: f64,
}

impl BatchSummary {
    pub fn record(&mut self, overall_score: f64, matched: bool) {
        // Running mean keeps the summary valid after every case.
        self.total += 1;
        self.mean_overall += (overall_score - self.mean_overall) / self.total as f64;
        if matched {
            self.matched += 1;
        }
    }

    pub fn match_rate(&self) -> f64 {
        if self.total > 0 {
            self.matched as f64 / self.total as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_running_mean() {
        let mut summary = BatchSummary::default();
        summary.record(100.0, true);
        summary.record(40.0, false);
        summary.record(70.0, true);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.matched, 2);
        assert!((summary.mean_overall - 70.0).abs() < 1e-9);
        assert!((summary.match_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = BatchSummary::default();
        assert_eq!(summary.match_rate(), 0.0);
        assert_eq!(summary.mean_overall, 0.0);
    }
}
