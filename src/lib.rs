//! Sedentary - an activity-driven reminder to break up sedentary time
//!
//! This library watches keyboard and mouse activity, counts down work and break
//! periods, and prompts the user through desktop notifications.

pub mod config;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::SedentaryState;
pub use tasks::Session;
pub use utils::signals::shutdown_signal;
