//! Dispatch grid domain models.
//!
//! Core data types for the timeline: jobs (bookings) and resources
//! (cleaners). Both are supplied read-only per render; the interaction
//! engine emits update requests instead of mutating them.
//!
//! # Domain Mappings
//!
//! | dispatch-grid | Turnover Ops | Field Service |
//! |---------------|--------------|---------------|
//! | Job | Cleaning visit | Work order |
//! | Resource | Cleaner | Technician |
//! | Row | Cleaner's day | Tech's day |

mod job;
mod resource;

pub use job::{Job, JobStatus, DEFAULT_DURATION_MINUTES};
pub use resource::{Resource, Role};
