pub mod chart;
pub mod config;
pub mod error;
pub mod extract;
pub mod load;
pub mod runlog;
pub mod transform;
