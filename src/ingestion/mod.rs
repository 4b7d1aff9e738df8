pub mod cases;
pub mod extracted_fields;

pub use cases::{load_cases, parse_cases, VerificationCase};
pub use extracted_fields::{DetectedField, FieldClass};
