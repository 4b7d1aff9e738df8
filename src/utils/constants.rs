// src/utils/constants.rs

/// Points contributed by each name rule that fires in score mode.
pub const NAME_RULE_POINTS: f64 = 20.0;

/// Upper bound for every component and overall score.
pub const MAX_SCORE: f64 = 100.0;

/// Default pass-mode address cutoff, on the [0, 100] token-similarity scale.
pub const DEFAULT_ADDRESS_CUTOFF: f64 = 70.0;

/// Overall score weights (score mode). They sum to 1.0.
pub const NAME_WEIGHT: f64 = 0.4;
pub const ADDRESS_WEIGHT: f64 = 0.4;
pub const UID_WEIGHT: f64 = 0.2;

/// Address component weights (score mode). They sum to 1.0.
pub const HOUSE_FLAT_WEIGHT: f64 = 0.15;
pub const STREET_ROAD_WEIGHT: f64 = 0.15;
pub const CITY_WEIGHT: f64 = 0.10;
pub const FLOOR_WEIGHT: f64 = 0.10;
pub const PINCODE_WEIGHT: f64 = 0.15;
pub const PREMISE_BUILDING_WEIGHT: f64 = 0.10;
pub const LANDMARK_WEIGHT: f64 = 0.10;
pub const STATE_WEIGHT: f64 = 0.15;

/// Address-type suffixes dropped by address normalisation.
pub const ADDRESS_NOISE_TOKENS: [&str; 3] = ["Marg", "Lane", "Township"];
