// src/models/matching.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::core::MatchMode;
use crate::utils::constants::{
    CITY_WEIGHT, FLOOR_WEIGHT, HOUSE_FLAT_WEIGHT, LANDMARK_WEIGHT, MAX_SCORE, PINCODE_WEIGHT,
    PREMISE_BUILDING_WEIGHT, STATE_WEIGHT, STREET_ROAD_WEIGHT,
};

/// One component's result: a verdict in pass mode, a [0, 100] score in score mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchOutcome {
    Pass(bool),
    Score(f64),
}

impl MatchOutcome {
    pub fn mode(&self) -> MatchMode {
        match self {
            MatchOutcome::Pass(_) => MatchMode::Pass,
            MatchOutcome::Score(_) => MatchMode::Score,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MatchOutcome::Pass(v) => Some(*v),
            MatchOutcome::Score(_) => None,
        }
    }

    pub fn as_score(&self) -> Option<f64> {
        match self {
            MatchOutcome::Score(v) => Some(*v),
            MatchOutcome::Pass(_) => None,
        }
    }

    /// Score on the [0, 100] scale; a pass verdict maps to 100 or 0.
    pub fn to_score(&self) -> f64 {
        match self {
            MatchOutcome::Pass(true) => MAX_SCORE,
            MatchOutcome::Pass(false) => 0.0,
            MatchOutcome::Score(v) => *v,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Pass(v) => write!(f, "{}", v),
            MatchOutcome::Score(v) => write!(f, "{:.2}", v),
        }
    }
}

/// Outcome of verifying one claim against one extracted record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub mode: MatchMode,
    pub name: MatchOutcome,
    pub address: MatchOutcome,
    pub uid: MatchOutcome,
    pub overall: MatchOutcome,
}

impl MatchResult {
    /// Pass mode returns the overall verdict; score mode compares the
    /// overall score against `threshold`.
    pub fn is_match(&self, threshold: f64) -> bool {
        match self.overall {
            MatchOutcome::Pass(v) => v,
            MatchOutcome::Score(v) => v >= threshold,
        }
    }

    pub fn overall_score(&self) -> f64 {
        self.overall.to_score()
    }
}

/// The six name rules. `Abbreviated` and `SingleLetterAbbrev` test the same
/// condition and are scored as separate rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameRule {
    Exact,
    Abbreviated,
    IgnoreMiddle,
    AnyPart,
    Circular,
    SingleLetterAbbrev,
}

impl NameRule {
    /// Evaluation order.
    pub const ALL: [NameRule; 6] = [
        NameRule::Exact,
        NameRule::Abbreviated,
        NameRule::IgnoreMiddle,
        NameRule::AnyPart,
        NameRule::Circular,
        NameRule::SingleLetterAbbrev,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameRule::Exact => "exact",
            NameRule::Abbreviated => "abbreviated",
            NameRule::IgnoreMiddle => "ignore_middle",
            NameRule::AnyPart => "any_part",
            NameRule::Circular => "circular",
            NameRule::SingleLetterAbbrev => "single_letter_abbrev",
        }
    }

    /// Whether the rule gives the same result with its arguments swapped.
    pub fn is_symmetric(&self) -> bool {
        matches!(self, NameRule::Exact | NameRule::AnyPart | NameRule::Circular)
    }
}

/// Address sub-components scored in score mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressComponent {
    House,
    Street,
    City,
    Floor,
    Pincode,
    Premise,
    Landmark,
    State,
}

impl AddressComponent {
    /// Table order; also the order of `AddressMatcher::component_scores`.
    pub const ALL: [AddressComponent; 8] = [
        AddressComponent::House,
        AddressComponent::Street,
        AddressComponent::City,
        AddressComponent::Floor,
        AddressComponent::Pincode,
        AddressComponent::Premise,
        AddressComponent::Landmark,
        AddressComponent::State,
    ];

    pub fn weight(&self) -> f64 {
        match self {
            AddressComponent::House => HOUSE_FLAT_WEIGHT,
            AddressComponent::Street => STREET_ROAD_WEIGHT,
            AddressComponent::City => CITY_WEIGHT,
            AddressComponent::Floor => FLOOR_WEIGHT,
            AddressComponent::Pincode => PINCODE_WEIGHT,
            AddressComponent::Premise => PREMISE_BUILDING_WEIGHT,
            AddressComponent::Landmark => LANDMARK_WEIGHT,
            AddressComponent::State => STATE_WEIGHT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressComponent::House => "House/Flat",
            AddressComponent::Street => "Street/Road",
            AddressComponent::City => "City",
            AddressComponent::Floor => "Floor",
            AddressComponent::Pincode => "Pincode",
            AddressComponent::Premise => "Premise/Building",
            AddressComponent::Landmark => "Landmark",
            AddressComponent::State => "State",
        }
    }
}

/// Score of one address sub-component, in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldScore {
    pub component: AddressComponent,
    pub value: f64,
}

impl FieldScore {
    pub fn weighted(&self) -> f64 {
        self.value * self.component.weight()
    }
}
