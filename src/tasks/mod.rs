//! Background tasks module
//!
//! This module contains the two event producers and the session that consumes them.

pub mod activity_observer;
pub mod session;
pub mod timer_loop;

// Re-export main functions
pub use activity_observer::activity_observer_task;
pub use session::{session_task, Session};
pub use timer_loop::timer_loop_task;
