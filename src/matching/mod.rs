pub mod address;
pub mod manager;
pub mod name;
pub mod uid;

pub use address::{match_address, normalize_address, AddressMatcher};
pub use manager::{evaluate, CaseReport, VerificationEngine};
pub use name::match_name;
pub use uid::match_uid;
