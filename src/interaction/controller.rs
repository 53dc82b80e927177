//! Single-slot gesture controller.
//!
//! One controller serves the whole grid. The active gesture lives in a
//! single nullable slot, so a second pointer-down while one is running
//! is rejected rather than racing it. Input listener lifetime is tied
//! to that slot through the [`PointerBinding`] hook: attached when a
//! gesture begins, detached when it finishes or is cancelled — never
//! to the host component's mount lifetime, so an unmount mid-drag
//! cannot leak listeners.

use chrono::Duration;
use tracing::debug;

use super::state::{ActiveInteraction, GhostRect, InteractionKind, PointerPoint};
use super::update::{GridEvent, JobUpdate};
use crate::error::{GridError, GridResult};
use crate::geometry::TimeGrid;
use crate::layout::RowRegistry;
use crate::models::Job;

/// Host hook for global input listener lifetime.
///
/// `attach` is called exactly once when a gesture begins; `detach`
/// exactly once when it ends, whether by release or cancellation.
/// Hosts use this to subscribe/unsubscribe their global move/up
/// listeners and to capture the pointer to the originating element.
pub trait PointerBinding {
    /// Gesture began: subscribe global move/up listeners.
    fn attach(&mut self);
    /// Gesture ended: unsubscribe them.
    fn detach(&mut self);
}

/// Pointer interaction state machine for one dispatch grid.
pub struct InteractionController {
    grid: TimeGrid,
    state: Option<ActiveInteraction>,
    binding: Option<Box<dyn PointerBinding>>,
    read_only: bool,
}

impl InteractionController {
    /// Creates a controller for an interactive grid.
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            state: None,
            binding: None,
            read_only: false,
        }
    }

    /// Marks the grid read-only: every `begin` is rejected, so
    /// dead-end gestures never start. Use when the host has no
    /// update path to persist commits into.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Installs the listener-lifetime hook.
    pub fn with_binding(mut self, binding: Box<dyn PointerBinding>) -> Self {
        self.binding = Some(binding);
        self
    }

    /// The coordinate mapper in effect.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Whether a gesture is currently running.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// The job under interaction, if any.
    pub fn active_job(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.job_id.as_str())
    }

    /// Starts a gesture at pointer-down.
    ///
    /// Snapshots everything the commit math needs (pre-gesture left
    /// offset and width, original interval, primary resource) so the
    /// release step never re-reads the job list. Rejected when the
    /// grid is read-only, when another gesture is active, or when a
    /// drag has no resource row to fall back to.
    pub fn begin(
        &mut self,
        kind: InteractionKind,
        job: &Job,
        pointer: PointerPoint,
    ) -> GridResult<()> {
        if self.read_only {
            return Err(GridError::ReadOnly);
        }
        if let Some(active) = &self.state {
            return Err(GridError::InteractionActive(active.job_id.clone()));
        }
        let home_resource = job.primary_resource().map(str::to_owned);
        if kind == InteractionKind::Drag && home_resource.is_none() {
            return Err(GridError::MissingResource(job.id.clone()));
        }

        self.state = Some(ActiveInteraction {
            kind,
            job_id: job.id.clone(),
            origin: pointer,
            start_left_px: self.grid.x_for_time(job.start_time),
            start_width_px: self.grid.width_for_span(job.start_time, job.end_time),
            original_start: job.start_time,
            original_duration: job.effective_duration(),
            home_resource,
            hovered_resource: None,
            moved: false,
        });
        if let Some(binding) = &mut self.binding {
            binding.attach();
        }
        debug!(job_id = %job.id, ?kind, "interaction began");
        Ok(())
    }

    /// Recomputes live feedback for a pointer move.
    ///
    /// Returns the unsnapped ghost rectangle, or `None` when idle.
    /// Runs on every native move event: O(rows) for the drag
    /// hit-test, allocation-free otherwise.
    pub fn update(&mut self, pointer: PointerPoint, rows: &RowRegistry) -> Option<GhostRect> {
        let state = self.state.as_mut()?;
        let dx = pointer.x - state.origin.x;
        let dy = pointer.y - state.origin.y;
        if dx != 0.0 || dy != 0.0 {
            state.moved = true;
        }
        let min_width = self.grid.config().snap_px();

        let ghost = match state.kind {
            InteractionKind::Drag => {
                if let Some(row) = rows.row_at(pointer.y) {
                    state.hovered_resource = Some(row.to_owned());
                }
                GhostRect {
                    left_px: state.start_left_px + dx,
                    width_px: state.start_width_px,
                    y_offset_px: dy,
                    hovered_resource: state.hovered_resource.clone(),
                }
            }
            InteractionKind::ResizeRight => GhostRect {
                left_px: state.start_left_px,
                width_px: (state.start_width_px + dx).max(min_width),
                y_offset_px: 0.0,
                hovered_resource: None,
            },
            InteractionKind::ResizeLeft => {
                // Left edge cannot pass right_edge - min_width.
                let shift = dx.min(state.start_width_px - min_width);
                GhostRect {
                    left_px: state.start_left_px + shift,
                    width_px: state.start_width_px - shift,
                    y_offset_px: 0.0,
                    hovered_resource: None,
                }
            }
        };
        Some(ghost)
    }

    /// Completes the gesture at pointer-up and returns the outcome.
    ///
    /// The raw horizontal delta is snapped to the nearest grid line
    /// before becoming a time delta; a gesture with no observed
    /// movement emits [`GridEvent::Select`] instead of an update. The
    /// slot is cleared and the binding detached unconditionally.
    pub fn finish(&mut self, pointer: PointerPoint, rows: &RowRegistry) -> Option<GridEvent> {
        let mut state = self.state.take()?;
        if let Some(binding) = &mut self.binding {
            binding.detach();
        }

        let dx = pointer.x - state.origin.x;
        let dy = pointer.y - state.origin.y;
        if !(state.moved || dx != 0.0 || dy != 0.0) {
            debug!(job_id = %state.job_id, "plain click, selecting");
            return Some(GridEvent::Select { job_id: state.job_id });
        }

        let delta = Duration::minutes(self.grid.minutes_for_px(self.grid.snap(dx)));
        let min_duration = Duration::minutes(i64::from(self.grid.config().snap_minutes));
        let original_end = state.original_start + state.original_duration;

        let update = match state.kind {
            InteractionKind::ResizeRight => {
                // Floor the end so the duration never collapses below
                // one granularity unit.
                let floor = state.original_start + min_duration;
                let new_end = (original_end + delta).max(floor);
                JobUpdate {
                    start_time: state.original_start,
                    end_time: new_end,
                    resource_ids: None,
                }
            }
            InteractionKind::ResizeLeft => {
                // Clamp the delta before applying it, so an inverted
                // interval can never be emitted.
                let max_shift = state.original_duration - min_duration;
                let shift = delta.min(max_shift);
                JobUpdate {
                    start_time: state.original_start + shift,
                    end_time: original_end,
                    resource_ids: None,
                }
            }
            InteractionKind::Drag => {
                if let Some(row) = rows.row_at(pointer.y) {
                    state.hovered_resource = Some(row.to_owned());
                }
                // Released outside every row: keep the original resource.
                let target = state
                    .hovered_resource
                    .or(state.home_resource)
                    .unwrap_or_default();
                let new_start = state.original_start + delta;
                JobUpdate {
                    start_time: new_start,
                    end_time: new_start + state.original_duration,
                    resource_ids: Some(vec![target]),
                }
            }
        };

        debug!(
            job_id = %state.job_id,
            kind = ?state.kind,
            start = %update.start_time,
            end = %update.end_time,
            "interaction committed"
        );
        Some(GridEvent::Update {
            job_id: state.job_id,
            update,
        })
    }

    /// Aborts the gesture without emitting anything.
    ///
    /// Hosts call this on unmount mid-gesture; the binding is still
    /// detached, so listeners cannot leak.
    pub fn cancel(&mut self) {
        if let Some(state) = self.state.take() {
            if let Some(binding) = &mut self.binding {
                binding.detach();
            }
            debug!(job_id = %state.job_id, "interaction cancelled");
        }
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("grid", &self.grid)
            .field("active_job", &self.active_job())
            .field("read_only", &self.read_only)
            .field("has_binding", &self.binding.is_some())
            .finish()
    }
}
