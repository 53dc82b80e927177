//! Committed interaction outcomes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Changed-fields payload emitted when a gesture commits.
///
/// Carries exactly what the gesture changed: both edges for any
/// time-affecting gesture, and the replacement resource list only for
/// a drag. The engine never mutates its inputs; the host persists this
/// and supplies fresh data on the next render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobUpdate {
    /// New start time.
    pub start_time: NaiveDateTime,
    /// New end time. Always concrete: a synthesized default duration,
    /// once used for layout, is honored here too.
    pub end_time: NaiveDateTime,
    /// Replacement resource assignment (drag only). Always a single
    /// element; replaces, never appends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_ids: Option<Vec<String>>,
}

/// Outcome of a completed gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GridEvent {
    /// A drag or resize committed; the host should persist the update.
    Update { job_id: String, update: JobUpdate },
    /// A plain click (no movement); the host should open the details
    /// panel. Never fired for a gesture that moved.
    Select { job_id: String },
}

impl GridEvent {
    /// The job this event concerns.
    pub fn job_id(&self) -> &str {
        match self {
            GridEvent::Update { job_id, .. } | GridEvent::Select { job_id } => job_id,
        }
    }
}
