// src/matching/address.rs - Address normalisation and the two address matching strategies
//
// Pass mode averages per-token best similarities and gates on the pincode.
// Score mode is a weighted sum over eight regex-extracted components.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;

use crate::models::core::MatchMode;
use crate::models::matching::{AddressComponent, FieldScore, MatchOutcome};
use crate::models::stats_models::MatchMethodType;
use crate::utils::constants::{ADDRESS_NOISE_TOKENS, DEFAULT_ADDRESS_CUTOFF, MAX_SCORE};
use crate::utils::progress_bars::logging::MatchingLogger;
use crate::utils::similarity::similarity_ratio;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {:?}: {}", pattern, e))
}

static NOISE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\b(?:{})\b", ADDRESS_NOISE_TOKENS.join("|"))));
static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| compile(r"\W+"));
static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| compile(r"\d+"));

static HOUSE_FLAT_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b\d+[a-zA-Z]?\b"));
static ALPHA_TOKEN_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\b[a-zA-Z]+\b"));
static FLOOR_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b\d+[a-zA-Z]*\b"));
static PINCODE_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b\d{6}\b"));
static LANDMARK_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bnear\b.*"));

/// Drops address-type suffixes (Marg, Lane, Township), turns every run of
/// non-word characters into one space, trims and lower-cases.
pub fn normalize_address(address: &str) -> String {
    let without_noise = NOISE_TOKEN_RE.replace_all(address, "");
    let spaced = NON_WORD_RE.replace_all(&without_noise, " ");
    spaced.trim().to_lowercase()
}

/// How one component's text is pulled out of an address.
#[derive(Debug, Clone, Copy)]
pub enum Extraction {
    /// First match of the pattern in the raw address.
    FirstMatch(&'static Lazy<Regex>),
    /// The normalised address without its purely numeric tokens. Always present.
    NormalizedNonNumeric,
}

impl Extraction {
    pub fn extract<'a>(&self, address: &'a str) -> Option<Cow<'a, str>> {
        match self {
            Extraction::FirstMatch(re) => re.find(address).map(|m| Cow::Borrowed(m.as_str())),
            Extraction::NormalizedNonNumeric => {
                let normalized = normalize_address(address);
                let words: Vec<&str> = normalized
                    .split_whitespace()
                    .filter(|w| !w.chars().all(char::is_numeric))
                    .collect();
                Some(Cow::Owned(words.join(" ")))
            }
        }
    }
}

/// An address component scorer: extract from both sides, compare
/// with the similarity ratio, 0 when either side has nothing to extract.
#[derive(Debug, Clone, Copy)]
pub struct ComponentExtractor {
    pub component: AddressComponent,
    pub extraction: Extraction,
}

impl ComponentExtractor {
    pub fn score(&self, claimed: &str, extracted: &str) -> f64 {
        match (self.extraction.extract(claimed), self.extraction.extract(extracted)) {
            (Some(a), Some(b)) => (similarity_ratio(&a, &b) * MAX_SCORE).clamp(0.0, MAX_SCORE),
            _ => 0.0,
        }
    }
}

/// City, Premise and State share the first-alphabetic-token pattern.
pub static COMPONENT_EXTRACTORS: [ComponentExtractor; 8] = [
    ComponentExtractor {
        component: AddressComponent::House,
        extraction: Extraction::FirstMatch(&HOUSE_FLAT_RE),
    },
    ComponentExtractor {
        component: AddressComponent::Street,
        extraction: Extraction::NormalizedNonNumeric,
    },
    ComponentExtractor {
        component: AddressComponent::City,
        extraction: Extraction::FirstMatch(&ALPHA_TOKEN_RE),
    },
    ComponentExtractor {
        component: AddressComponent::Floor,
        extraction: Extraction::FirstMatch(&FLOOR_RE),
    },
    ComponentExtractor {
        component: AddressComponent::Pincode,
        extraction: Extraction::FirstMatch(&PINCODE_RE),
    },
    ComponentExtractor {
        component: AddressComponent::Premise,
        extraction: Extraction::FirstMatch(&ALPHA_TOKEN_RE),
    },
    ComponentExtractor {
        component: AddressComponent::Landmark,
        extraction: Extraction::FirstMatch(&LANDMARK_RE),
    },
    ComponentExtractor {
        component: AddressComponent::State,
        extraction: Extraction::FirstMatch(&ALPHA_TOKEN_RE),
    },
];

/// Intermediate figures of the pass-mode strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PassEvaluation {
    pub token_score: f64,
    pub pincode_match: bool,
    pub passed: bool,
}

/// Mean over claimed tokens of the best similarity against any extracted
/// token, on [0, 100]. No claimed tokens scores 0.
pub fn token_similarity_score(claimed: &str, extracted: &str) -> f64 {
    let claimed = normalize_address(claimed);
    let extracted = normalize_address(extracted);
    let input_fields: Vec<&str> = claimed.split_whitespace().collect();
    let extracted_fields: Vec<&str> = extracted.split_whitespace().collect();

    if input_fields.is_empty() {
        return 0.0;
    }

    let mut match_score = 0.0;
    let mut total_weight = 0.0;
    for field in &input_fields {
        let best = extracted_fields
            .iter()
            .map(|e| similarity_ratio(field, e))
            .fold(0.0, f64::max);
        match_score += best * MAX_SCORE;
        total_weight += MAX_SCORE;
    }

    (match_score / total_weight * MAX_SCORE).clamp(0.0, MAX_SCORE)
}

/// Shortest digit run accepted as a pincode.
const PINCODE_MIN_DIGITS: usize = 6;

fn first_digit_run(normalized: &str) -> Option<&str> {
    DIGIT_RUN_RE.find(normalized).map(|m| m.as_str())
}

/// The first digit runs of both normalised addresses are identical and at
/// least six digits long. An earlier flat or ward number is what gets
/// compared, so it closes the gate.
pub fn pincode_gate(claimed: &str, extracted: &str) -> bool {
    let claimed = normalize_address(claimed);
    let extracted = normalize_address(extracted);
    match (first_digit_run(&claimed), first_digit_run(&extracted)) {
        (Some(a), Some(b)) => a == b && a.chars().count() >= PINCODE_MIN_DIGITS,
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddressMatcher {
    /// Pass-mode threshold on the token similarity score. Informational in score mode.
    pub cutoff: f64,
}

impl Default for AddressMatcher {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_ADDRESS_CUTOFF,
        }
    }
}

impl AddressMatcher {
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    pub fn evaluate_pass(&self, claimed: &str, extracted: &str) -> PassEvaluation {
        let token_score = token_similarity_score(claimed, extracted);
        let pincode_match = pincode_gate(claimed, extracted);
        MatchingLogger::new(MatchMethodType::Address).log_token_similarity(
            token_score,
            pincode_match,
            self.cutoff,
        );
        PassEvaluation {
            token_score,
            pincode_match,
            passed: pincode_match && token_score >= self.cutoff,
        }
    }

    pub fn is_match(&self, claimed: &str, extracted: &str) -> bool {
        self.evaluate_pass(claimed, extracted).passed
    }

    /// The eight component scores in table order.
    pub fn component_scores(&self, claimed: &str, extracted: &str) -> Vec<FieldScore> {
        COMPONENT_EXTRACTORS
            .iter()
            .map(|extractor| FieldScore {
                component: extractor.component,
                value: extractor.score(claimed, extracted),
            })
            .collect()
    }

    /// Weighted component sum. The cutoff never filters this value.
    pub fn score(&self, claimed: &str, extracted: &str) -> f64 {
        let scores = self.component_scores(claimed, extracted);
        let final_score = weighted_total(&scores);
        MatchingLogger::new(MatchMethodType::Address).log_component_scores(&scores, final_score);
        final_score
    }

    pub fn match_address(&self, claimed: &str, extracted: &str, mode: MatchMode) -> MatchOutcome {
        let logger = MatchingLogger::new(MatchMethodType::Address);
        let outcome = match mode {
            MatchMode::Pass => MatchOutcome::Pass(self.is_match(claimed, extracted)),
            MatchMode::Score => MatchOutcome::Score(self.score(claimed, extracted)),
        };
        logger.log_outcome(&outcome);
        outcome
    }
}

pub fn weighted_total(scores: &[FieldScore]) -> f64 {
    scores
        .iter()
        .map(FieldScore::weighted)
        .sum::<f64>()
        .clamp(0.0, MAX_SCORE)
}

pub fn match_address(claimed: &str, extracted: &str, mode: MatchMode, cutoff: f64) -> MatchOutcome {
    AddressMatcher::new(cutoff).match_address(claimed, extracted, mode)
}
