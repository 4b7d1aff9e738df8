// src/matching/uid.rs - Unique identifier matching
use crate::models::core::MatchMode;
use crate::models::matching::MatchOutcome;
use crate::models::stats_models::MatchMethodType;
use crate::utils::constants::MAX_SCORE;
use crate::utils::progress_bars::logging::MatchingLogger;

/// Exact equality. Spacing and formatting are significant; callers normalise
/// identifiers themselves if they need to.
pub fn uid_match(claimed: &str, extracted: &str) -> bool {
    claimed == extracted
}

pub fn uid_score(claimed: &str, extracted: &str) -> f64 {
    if uid_match(claimed, extracted) {
        MAX_SCORE
    } else {
        0.0
    }
}

pub fn match_uid(claimed: &str, extracted: &str, mode: MatchMode) -> MatchOutcome {
    let logger = MatchingLogger::new(MatchMethodType::Uid);
    let outcome = match mode {
        MatchMode::Pass => MatchOutcome::Pass(uid_match(claimed, extracted)),
        MatchMode::Score => MatchOutcome::Score(uid_score(claimed, extracted)),
    };
    logger.log_outcome(&outcome);
    outcome
}
