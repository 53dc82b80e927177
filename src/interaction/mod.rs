//! Pointer interaction state machine.
//!
//! Tracks at most one active gesture (drag or edge resize) across the
//! whole grid, produces unsnapped live feedback while the pointer
//! moves, and computes the snapped, committed field values on release.
//!
//! # Lifecycle
//!
//! ```text
//! idle --begin(Drag)--------> dragging  --finish--> idle
//! idle --begin(ResizeLeft)--> resizing  --finish--> idle
//!        (or ResizeRight)               --cancel--> idle
//! ```
//!
//! Only the committed values are snapped to the grid's granularity;
//! live feedback follows the raw pointer for smooth tracking.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use dispatch_grid::geometry::{GridConfig, TimeGrid};
//! use dispatch_grid::interaction::{InteractionController, InteractionKind, PointerPoint};
//! use dispatch_grid::layout::{RowBounds, RowRegistry};
//! use dispatch_grid::models::Job;
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let grid = TimeGrid::new(GridConfig::default(), day);
//! let mut rows = RowRegistry::new();
//! rows.publish("emp-1", RowBounds::new(0.0, 48.0));
//!
//! let job = Job::new("job-1", day.and_hms_opt(9, 0, 0).unwrap())
//!     .with_resource("emp-1")
//!     .with_end_time(day.and_hms_opt(11, 0, 0).unwrap());
//!
//! let mut controller = InteractionController::new(grid);
//! controller
//!     .begin(InteractionKind::Drag, &job, PointerPoint::new(150.0, 20.0))
//!     .unwrap();
//! controller.update(PointerPoint::new(197.0, 20.0), &rows);
//! let event = controller.finish(PointerPoint::new(197.0, 20.0), &rows);
//! assert!(event.is_some());
//! ```

mod controller;
mod state;
mod update;

pub use controller::{InteractionController, PointerBinding};
pub use state::{GhostRect, InteractionKind, PointerPoint};
pub use update::{GridEvent, JobUpdate};
