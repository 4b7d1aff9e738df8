pub mod core;
pub mod matching;
pub mod report;
pub mod stats_models;

pub use self::core::{ExtractedRecord, IdentityClaim, MatchMode};
pub use self::matching::{AddressComponent, FieldScore, MatchOutcome, MatchResult, NameRule};
pub use self::report::VerificationReport;
pub use self::stats_models::{BatchSummary, MatchMethodType};
