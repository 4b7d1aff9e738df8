// src/models/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::matching::manager::CaseReport;
use crate::models::core::MatchMode;
use crate::models::stats_models::BatchSummary;

/// Output of one batch verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub mode: MatchMode,
    pub address_cutoff: f64,
    pub cases: Vec<CaseReport>,
    pub summary: BatchSummary,
}

impl VerificationReport {
    pub fn new(
        run_id: Uuid,
        started_at: DateTime<Utc>,
        mode: MatchMode,
        address_cutoff: f64,
        cases: Vec<CaseReport>,
        summary: BatchSummary,
    ) -> Self {
        Self {
            run_id,
            started_at,
            mode,
            address_cutoff,
            cases,
            summary,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let report = VerificationReport::new(
            Uuid::new_v4(),
            Utc::now(),
            MatchMode::Score,
            70.0,
            Vec::new(),
            BatchSummary::default(),
        );
        let value: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["mode"], "score");
        assert_eq!(value["address_cutoff"], 70.0);
        assert_eq!(value["summary"]["total"], 0);
        assert!(value["run_id"].as_str().is_some());
        assert!(value["cases"].as_array().unwrap().is_empty());
    }
}
