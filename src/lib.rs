//! Dispatch timeline interaction engine.
//!
//! Lays out jobs (cleaning/turnover bookings) against a resource axis
//! (one row per cleaner) and a time axis (hours of one visible day),
//! and turns pointer gestures — drag a block to reassign its row and
//! shift its time, or resize an edge to change its duration — into
//! discrete update requests snapped to a fixed time granularity.
//!
//! The crate is UI-toolkit-agnostic: it owns geometry, hit-testing,
//! and the gesture state machine, while rendering and persistence stay
//! with the host. Hosts feed pointer events in, draw the returned
//! ghost rectangle, and persist the emitted [`interaction::GridEvent`]s.
//!
//! # Modules
//!
//! - **`models`**: `Job`, `Resource` — the per-render, read-only input
//! - **`geometry`**: `TimeGrid` — time↔pixel mapping and snapping
//! - **`layout`**: `RowRegistry` — row bounds and vertical hit-testing
//! - **`interaction`**: `InteractionController` — the gesture state
//!   machine and its committed outcomes
//! - **`validation`**: integrity checks over the supplied arrays
//!
//! # Design
//!
//! One nullable interaction slot serves the whole grid, so gestures
//! cannot overlap. Live feedback is unsnapped for smooth tracking;
//! only the committed values land on grid lines. Commits are
//! fire-and-forget: the engine emits the request, resets to idle, and
//! relies on the host to re-render with fresh truth (a rejected update
//! simply renders the old data back).

pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod models;
pub mod validation;

pub use error::{GridError, GridResult};
