pub mod constants;
pub mod env;
pub mod progress_bars;
pub mod similarity;
pub mod verify_config;
