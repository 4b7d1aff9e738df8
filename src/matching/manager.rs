// src/matching/manager.rs - Combines name, address and UID results into one verdict
use log::debug;
use serde::Serialize;

use crate::ingestion::cases::VerificationCase;
use crate::matching::address::AddressMatcher;
use crate::matching::{name, uid};
use crate::models::core::{ExtractedRecord, IdentityClaim, MatchMode};
use crate::models::matching::{FieldScore, MatchOutcome, MatchResult};
use crate::models::stats_models::BatchSummary;
use crate::utils::constants::{ADDRESS_WEIGHT, DEFAULT_ADDRESS_CUTOFF, MAX_SCORE, NAME_WEIGHT, UID_WEIGHT};

/// Stateless evaluator; one instance can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerificationEngine {
    pub mode: MatchMode,
    pub address: AddressMatcher,
    pub include_breakdown: bool,
}

/// Per-case entry of a batch report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    pub case_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_class: Option<String>,
    pub matched: bool,
    pub result: MatchResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_breakdown: Option<Vec<FieldScore>>,
}

impl VerificationEngine {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            address: AddressMatcher::new(DEFAULT_ADDRESS_CUTOFF),
            include_breakdown: false,
        }
    }

    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.address = AddressMatcher::new(cutoff);
        self
    }

    /// Attach the address component scores to score-mode batch reports.
    pub fn with_breakdown(mut self, include: bool) -> Self {
        self.include_breakdown = include;
        self
    }

    pub fn cutoff(&self) -> f64 {
        self.address.cutoff
    }

    pub fn evaluate(&self, claim: &IdentityClaim, extracted: &ExtractedRecord) -> MatchResult {
        let name = name::match_name(&claim.name, &extracted.name, self.mode);
        let address = self
            .address
            .match_address(&claim.address, &extracted.address, self.mode);
        let uid = uid::match_uid(&claim.uid, &extracted.uid, self.mode);

        let overall = match self.mode {
            MatchMode::Pass => MatchOutcome::Pass(
                name.as_bool().unwrap_or(false)
                    && address.as_bool().unwrap_or(false)
                    && uid.as_bool().unwrap_or(false),
            ),
            MatchMode::Score => MatchOutcome::Score(weighted_overall(
                name.to_score(),
                address.to_score(),
                uid.to_score(),
            )),
        };

        debug!(
            "Overall ({}): name={} address={} uid={} → {}",
            self.mode, name, address, uid, overall
        );

        MatchResult {
            mode: self.mode,
            name,
            address,
            uid,
            overall,
        }
    }

    /// Verdict for a result under this engine: the overall boolean in pass
    /// mode, overall score against the cutoff in score mode.
    pub fn is_match(&self, result: &MatchResult) -> bool {
        result.is_match(self.cutoff())
    }

    pub fn evaluate_case(&self, case: &VerificationCase) -> CaseReport {
        let result = self.evaluate(&case.claim, &case.extracted);
        let address_breakdown = (self.include_breakdown && self.mode == MatchMode::Score)
            .then(|| {
                self.address
                    .component_scores(&case.claim.address, &case.extracted.address)
            });
        CaseReport {
            case_id: case.id.clone(),
            document_class: case.document_class.clone(),
            matched: self.is_match(&result),
            result,
            address_breakdown,
        }
    }

    pub fn evaluate_batch(&self, cases: &[VerificationCase]) -> (Vec<CaseReport>, BatchSummary) {
        self.evaluate_batch_with(cases, |_| {})
    }

    /// Like `evaluate_batch`, calling `on_case` after each case is scored.
    pub fn evaluate_batch_with<F>(
        &self,
        cases: &[VerificationCase],
        mut on_case: F,
    ) -> (Vec<CaseReport>, BatchSummary)
    where
        F: FnMut(&CaseReport),
    {
        let mut summary = BatchSummary::default();
        let reports = cases
            .iter()
            .map(|case| {
                let report = self.evaluate_case(case);
                summary.record(report.result.overall_score(), report.matched);
                on_case(&report);
                report
            })
            .collect();
        (reports, summary)
    }
}

/// 40% name, 40% address, 20% UID, clamped to [0, 100].
pub fn weighted_overall(name_score: f64, address_score: f64, uid_score: f64) -> f64 {
    (name_score * NAME_WEIGHT + address_score * ADDRESS_WEIGHT + uid_score * UID_WEIGHT)
        .clamp(0.0, MAX_SCORE)
}

/// Evaluates with the default address cutoff.
pub fn evaluate(claim: &IdentityClaim, extracted: &ExtractedRecord, mode: MatchMode) -> MatchResult {
    VerificationEngine::new(mode).evaluate(claim, extracted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn reference_cases() -> Vec<VerificationCase> {
        vec![
            VerificationCase::new(
                "hyderabad",
                IdentityClaim::new(
                    "Rahul Dwivedi",
                    "B-404,4th floor,kphb,kphb colony entrance,Tower,hyderabad,Telangana,500001",
                    "9860 03559198",
                ),
                ExtractedRecord::new(
                    "Rahul D",
                    "kphb colony entrance,Tower,hyderabad,Telangana,500001",
                    "9860 0355 9198",
                ),
            ),
            VerificationCase::new(
                "patna",
                IdentityClaim::new(
                    "Pushpam Kumar",
                    "ward-10,1st,Rampur Dilawar,Vaishali,Near Hospital,Patna,Bihar-844124",
                    "9103 5715 3824",
                ),
                ExtractedRecord::new("Kumar", "Vaishali,Bihar-844124", "9103 5715 3824"),
            ),
            VerificationCase::new(
                "durg",
                IdentityClaim::new("Adhithya", "Bilai,Durg,Chattisgarh,490006", "8028 5266 0990"),
                ExtractedRecord::new("Aditya", "Bilai,Durg", "8028 5266 0990"),
            ),
        ]
    }

    #[test]
    fn test_pass_mode_is_conjunction() {
        let cases = reference_cases();

        // "404" on the claimed side is compared against "500001".
        let result = evaluate(&cases[0].claim, &cases[0].extracted, MatchMode::Pass);
        assert_eq!(result.name, MatchOutcome::Pass(true));
        assert_eq!(result.address, MatchOutcome::Pass(false));
        assert_eq!(result.uid, MatchOutcome::Pass(false));
        assert_eq!(result.overall, MatchOutcome::Pass(false));

        let result = evaluate(&cases[1].claim, &cases[1].extracted, MatchMode::Pass);
        assert_eq!(result.name, MatchOutcome::Pass(true));
        assert_eq!(result.address, MatchOutcome::Pass(false));
        assert_eq!(result.uid, MatchOutcome::Pass(true));
        assert_eq!(result.overall, MatchOutcome::Pass(false));

        // Pincode first on both sides; token score 66.49 sits between the cutoffs.
        let claim = IdentityClaim::new(
            "Pushpam Kumar",
            "Rampur Dilawar,Vaishali,Patna,Bihar-844124",
            "9103 5715 3824",
        );
        let strict = VerificationEngine::new(MatchMode::Pass);
        assert_eq!(strict.evaluate(&claim, &cases[1].extracted).overall, MatchOutcome::Pass(false));
        let lenient = VerificationEngine::new(MatchMode::Pass).with_cutoff(50.0);
        let result = lenient.evaluate(&claim, &cases[1].extracted);
        assert_eq!(result.overall, MatchOutcome::Pass(true));
    }

    #[test]
    fn test_score_mode_weighted_overall() {
        let cases = reference_cases();
        let engine = VerificationEngine::new(MatchMode::Score);

        let result = engine.evaluate(&cases[2].claim, &cases[2].extracted);
        assert_eq!(result.name, MatchOutcome::Score(0.0));
        assert_eq!(result.uid, MatchOutcome::Score(100.0));
        let address = AddressMatcher::default().score("Bilai,Durg,Chattisgarh,490006", "Bilai,Durg");
        assert_close(result.address.to_score(), address);
        assert_close(result.overall_score(), 0.0 * 0.4 + address * 0.4 + 100.0 * 0.2);
        assert_close(result.overall_score(), 37.75);

        let result = engine.evaluate(&cases[0].claim, &cases[0].extracted);
        assert_close(result.overall_score(), 20.0 * 0.4 + 33.21610601427115 * 0.4);
    }

    #[test]
    fn test_identical_record_scores_high() {
        let claim = IdentityClaim::new(
            "Rahul Dwivedi",
            "MG Road, Near City Mall, Indore, Madhya Pradesh 452001",
            "9860 0355 9198",
        );
        let extracted = ExtractedRecord::new(&claim.name, &claim.address, &claim.uid);

        assert_eq!(evaluate(&claim, &extracted, MatchMode::Pass).overall, MatchOutcome::Pass(true));

        let result = evaluate(&claim, &extracted, MatchMode::Score);
        assert_eq!(result.name, MatchOutcome::Score(100.0));
        assert_close(result.address.to_score(), 100.0);
        assert_close(result.overall_score(), 100.0);
    }

    #[test]
    fn test_empty_extraction_degrades() {
        let claim = IdentityClaim::new("Pushpam Kumar", "Patna 800001", "9103 5715 3824");
        let extracted = ExtractedRecord::default();

        assert_eq!(evaluate(&claim, &extracted, MatchMode::Pass).overall, MatchOutcome::Pass(false));
        let result = evaluate(&claim, &extracted, MatchMode::Score);
        assert_eq!(result.name, MatchOutcome::Score(0.0));
        assert_eq!(result.uid, MatchOutcome::Score(0.0));
        assert_close(result.overall_score(), result.address.to_score() * 0.4);
    }

    #[test]
    fn test_overall_bounds() {
        assert_close(weighted_overall(100.0, 100.0, 100.0), 100.0);
        assert_close(weighted_overall(0.0, 0.0, 0.0), 0.0);
        for case in reference_cases() {
            let result = evaluate(&case.claim, &case.extracted, MatchMode::Score);
            for outcome in [result.name, result.address, result.uid, result.overall] {
                assert!((0.0..=100.0).contains(&outcome.to_score()));
            }
        }
    }

    #[test]
    fn test_batch_reports_and_summary() {
        let engine = VerificationEngine::new(MatchMode::Score)
            .with_cutoff(30.0)
            .with_breakdown(true);
        let (reports, summary) = engine.evaluate_batch(&reference_cases());

        assert_eq!(reports.len(), 3);
        assert_eq!(summary.total, 3);
        assert_eq!(reports[0].case_id, "hyderabad");
        assert_eq!(reports[0].address_breakdown.as_ref().map(Vec::len), Some(8));
        let matched = reports.iter().filter(|r| r.matched).count();
        assert_eq!(summary.matched, matched);
        // durg: 37.75 >= 30
        assert!(reports[2].matched);

        let mean = reports.iter().map(|r| r.result.overall_score()).sum::<f64>() / 3.0;
        assert_close(summary.mean_overall, mean);
    }

    #[test]
    fn test_batch_hook_sees_every_case_in_order() {
        let engine = VerificationEngine::new(MatchMode::Score);
        let cases = reference_cases();
        let mut seen = Vec::new();
        let (reports, summary) = engine.evaluate_batch_with(&cases, |report| {
            seen.push((report.case_id.clone(), report.result.overall_score()));
        });

        assert_eq!(seen.len(), 3);
        let ids: Vec<&str> = seen.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["hyderabad", "patna", "durg"]);
        for ((_, score), report) in seen.iter().zip(&reports) {
            assert_close(*score, report.result.overall_score());
        }
        assert_eq!((reports, summary), engine.evaluate_batch(&cases));
    }

    #[test]
    fn test_breakdown_omitted_in_pass_mode() {
        let engine = VerificationEngine::new(MatchMode::Pass).with_breakdown(true);
        let report = engine.evaluate_case(&reference_cases()[0]);
        assert!(report.address_breakdown.is_none());
        assert!(!report.matched);
    }

    #[test]
    fn test_report_serializes_mode_shaped_values() {
        let engine = VerificationEngine::new(MatchMode::Pass);
        let report = engine.evaluate_case(&reference_cases()[0]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"]["mode"], "pass");
        assert_eq!(json["result"]["uid"], false);
        assert!(json.get("address_breakdown").is_none());
    }
}
