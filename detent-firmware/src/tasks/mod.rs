//! Embassy async tasks
//!
//! Both tasks share one `SharedClickEncoder`; every access goes through a
//! critical section.

pub mod report;
pub mod tick;

pub use report::report_task;
pub use tick::tick_task;
