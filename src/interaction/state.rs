//! Interaction state snapshots and live feedback.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Kind of gesture being performed on a job block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    /// Move the whole block: shift time and/or change row.
    Drag,
    /// Move the left edge: change start, keep end.
    ResizeLeft,
    /// Move the right edge: change end, keep start.
    ResizeRight,
}

/// Pointer position in grid-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

impl PointerPoint {
    /// Creates a pointer position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Snapshot taken at pointer-down, held for the gesture's lifetime.
///
/// Everything the commit math needs is captured here so that release
/// never has to consult the (possibly re-rendered) job list.
#[derive(Debug, Clone)]
pub(crate) struct ActiveInteraction {
    pub kind: InteractionKind,
    pub job_id: String,
    /// Pointer position at pointer-down.
    pub origin: PointerPoint,
    /// Block's left offset before the gesture (grid pixels).
    pub start_left_px: f64,
    /// Block's width before the gesture (grid pixels).
    pub start_width_px: f64,
    /// Job start at pointer-down.
    pub original_start: NaiveDateTime,
    /// Effective duration at pointer-down. For open-ended jobs this is
    /// the synthesized 2h default, which the commit math must honor.
    pub original_duration: Duration,
    /// Primary resource at pointer-down (drag fallback row).
    pub home_resource: Option<String>,
    /// Row the pointer was last over during the gesture.
    pub hovered_resource: Option<String>,
    /// Whether any pointer movement was observed. A release with no
    /// movement is a plain click (select), not a commit.
    pub moved: bool,
}

/// Unsnapped live-feedback rectangle recomputed on every pointer move.
///
/// Purely visual: the host draws the block at these offsets while the
/// gesture runs. Committed values come from the release step and are
/// snapped; these are not.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostRect {
    /// Left offset of the block (grid pixels).
    pub left_px: f64,
    /// Width of the block (grid pixels).
    pub width_px: f64,
    /// Vertical offset from the home row (drag only, 0 for resizes).
    pub y_offset_px: f64,
    /// Row currently under the pointer (drag only).
    pub hovered_resource: Option<String>,
}
