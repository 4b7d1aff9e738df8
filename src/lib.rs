//! Identity-document verification.
//!
//! Compares a user's identity claim (name, address, unique identifier)
//! against the fields recognised on a scanned document and returns either a
//! pass/fail verdict or graded [0, 100] scores per field plus an overall score.
//!
//! ```
//! use idverify_lib::{evaluate, ExtractedRecord, IdentityClaim, MatchMode, MatchOutcome};
//!
//! let claim = IdentityClaim::new("Pushpam Kumar", "Vaishali,Bihar-844124", "9103 5715 3824");
//! let extracted = ExtractedRecord::new("Kumar", "Vaishali,Bihar-844124", "9103 5715 3824");
//!
//! let result = evaluate(&claim, &extracted, MatchMode::Score);
//! assert_eq!(result.name, MatchOutcome::Score(20.0));
//! assert_eq!(result.uid, MatchOutcome::Score(100.0));
//! ```

pub mod error;
pub mod ingestion;
pub mod matching;
pub mod models;
pub mod utils;

pub use error::VerifyError;
pub use ingestion::{DetectedField, VerificationCase};
pub use matching::{evaluate, AddressMatcher, VerificationEngine};
pub use models::{ExtractedRecord, IdentityClaim, MatchMode, MatchOutcome, MatchResult};
