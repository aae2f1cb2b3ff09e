pub mod config;
pub mod matches;
pub mod performance;
