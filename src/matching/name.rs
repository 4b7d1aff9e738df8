// src/matching/name.rs - Rule-based name matching
use std::collections::HashSet;

use crate::models::core::MatchMode;
use crate::models::matching::{MatchOutcome, NameRule};
use crate::models::stats_models::MatchMethodType;
use crate::utils::constants::{MAX_SCORE, NAME_RULE_POINTS};
use crate::utils::progress_bars::logging::MatchingLogger;

impl NameRule {
    /// Evaluates this rule for `(claimed, extracted)`. Shape mismatches
    /// (wrong token counts, empty names) make the rule false, never an error.
    pub fn matches(&self, claimed: &str, extracted: &str) -> bool {
        match self {
            NameRule::Exact => exact_letter_match(claimed, extracted),
            NameRule::Abbreviated | NameRule::SingleLetterAbbrev => {
                first_letter_abbreviation(claimed, extracted)
            }
            NameRule::IgnoreMiddle => ignore_middle_names(claimed, extracted),
            NameRule::AnyPart => match_any_part(claimed, extracted),
            NameRule::Circular => circular_match(claimed, extracted),
        }
    }
}

fn lower_tokens(name: &str) -> Vec<String> {
    name.split_whitespace().map(|t| t.to_lowercase()).collect()
}

fn first_char_lower(token: &str) -> Option<String> {
    token.chars().next().map(|c| c.to_lowercase().collect())
}

pub fn exact_letter_match(name1: &str, name2: &str) -> bool {
    name1.to_lowercase() == name2.to_lowercase()
}

/// "Rahul Dwivedi" vs "R Dwivedi": two tokens each, same initial, same surname.
pub fn first_letter_abbreviation(name1: &str, name2: &str) -> bool {
    let parts1: Vec<&str> = name1.split_whitespace().collect();
    let parts2: Vec<&str> = name2.split_whitespace().collect();
    if parts1.len() != 2 || parts2.len() != 2 {
        return false;
    }
    let initials_match = match (first_char_lower(parts1[0]), first_char_lower(parts2[0])) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };
    initials_match && parts1[1].to_lowercase() == parts2[1].to_lowercase()
}

/// Two tokens against three (either way round): first and last tokens agree.
pub fn ignore_middle_names(name1: &str, name2: &str) -> bool {
    let parts1 = lower_tokens(name1);
    let parts2 = lower_tokens(name2);
    match (parts1.len(), parts2.len()) {
        (2, 3) => parts1[0] == parts2[0] && parts1[1] == parts2[2],
        (3, 2) => parts1[0] == parts2[0] && parts1[2] == parts2[1],
        _ => false,
    }
}

pub fn match_any_part(name1: &str, name2: &str) -> bool {
    let parts1: HashSet<String> = lower_tokens(name1).into_iter().collect();
    lower_tokens(name2).iter().any(|t| parts1.contains(t))
}

/// Same tokens in any order.
pub fn circular_match(name1: &str, name2: &str) -> bool {
    let parts1: HashSet<String> = lower_tokens(name1).into_iter().collect();
    let parts2: HashSet<String> = lower_tokens(name2).into_iter().collect();
    parts1 == parts2
}

/// Rules that fire for the pair, in evaluation order.
pub fn fired_rules(claimed: &str, extracted: &str) -> Vec<NameRule> {
    NameRule::ALL
        .iter()
        .copied()
        .filter(|rule| rule.matches(claimed, extracted))
        .collect()
}

/// Pass mode: true as soon as any rule fires.
pub fn name_match(claimed: &str, extracted: &str) -> bool {
    NameRule::ALL.iter().any(|rule| rule.matches(claimed, extracted))
}

/// Score mode: 20 points per fired rule, capped at 100.
pub fn name_score(claimed: &str, extracted: &str) -> f64 {
    let fired = fired_rules(claimed, extracted);
    MatchingLogger::new(MatchMethodType::Name).log_rules_fired(&fired);
    (fired.len() as f64 * NAME_RULE_POINTS).min(MAX_SCORE)
}

pub fn match_name(claimed: &str, extracted: &str, mode: MatchMode) -> MatchOutcome {
    let logger = MatchingLogger::new(MatchMethodType::Name);
    let outcome = match mode {
        MatchMode::Pass => MatchOutcome::Pass(name_match(claimed, extracted)),
        MatchMode::Score => MatchOutcome::Score(name_score(claimed, extracted)),
    };
    logger.log_outcome(&outcome);
    outcome
}
