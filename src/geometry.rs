//! Time-pixel coordinate mapping.
//!
//! Converts between wall-clock time and horizontal pixel offset for a
//! single visible day bounded by a configurable start and end hour.
//!
//! The mapping is pure and unclamped: times before the visible start
//! hour map to negative offsets and times after the end hour extend
//! past the grid. The host scrolls/overflows rather than clipping, so
//! `time_for_x(x_for_time(t))` always recovers `t` (within one pixel's
//! rounding).
//!
//! # Snapping
//! `snap_px = snap_minutes / 60 × hour_width_px`. Every committed block
//! position and width must be an integer multiple of `snap_px` measured
//! from the grid origin, never from the block's pre-drag position — a
//! dropped or resized block lands exactly on a grid line.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_DURATION_MINUTES;

/// Grid layout constants.
///
/// Fixed per grid instance; exposed as configuration rather than
/// hard-coded so hosts can show different day windows or densities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridConfig {
    /// First visible hour of the day (inclusive).
    pub start_hour: u32,
    /// Last visible hour of the day (exclusive).
    pub end_hour: u32,
    /// Pixel width of one hour column.
    pub hour_width_px: f64,
    /// Smallest time increment a committed position/duration may use.
    pub snap_minutes: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 18,
            hour_width_px: 120.0,
            snap_minutes: 10,
        }
    }
}

impl GridConfig {
    /// Pixel size of one snap unit.
    #[inline]
    pub fn snap_px(&self) -> f64 {
        f64::from(self.snap_minutes) / 60.0 * self.hour_width_px
    }

    /// Total visible width in pixels.
    #[inline]
    pub fn visible_width_px(&self) -> f64 {
        f64::from(self.end_hour.saturating_sub(self.start_hour)) * self.hour_width_px
    }

    /// Whether the configuration is usable for layout.
    pub fn is_well_formed(&self) -> bool {
        self.end_hour > self.start_hour
            && self.end_hour <= 24
            && self.hour_width_px > 0.0
            && self.snap_minutes > 0
    }
}

/// Coordinate mapper for one visible day.
#[derive(Debug, Clone, Copy)]
pub struct TimeGrid {
    config: GridConfig,
    day: NaiveDate,
}

impl TimeGrid {
    /// Creates a mapper for the given day.
    pub fn new(config: GridConfig, day: NaiveDate) -> Self {
        Self { config, day }
    }

    /// The layout constants in effect.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The visible day.
    #[inline]
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Pixel origin of the grid: the visible day at `start_hour`.
    pub fn origin(&self) -> NaiveDateTime {
        let start = NaiveTime::from_hms_opt(self.config.start_hour, 0, 0).unwrap_or(NaiveTime::MIN);
        self.day.and_time(start)
    }

    /// Horizontal pixel offset for a timestamp.
    ///
    /// Unclamped: negative before the start hour, past the grid after
    /// the end hour.
    pub fn x_for_time(&self, t: NaiveDateTime) -> f64 {
        let elapsed = t - self.origin();
        elapsed.num_seconds() as f64 / 3600.0 * self.config.hour_width_px
    }

    /// Timestamp for a horizontal pixel offset. Inverse of
    /// [`x_for_time`](Self::x_for_time) within one pixel of rounding.
    pub fn time_for_x(&self, x: f64) -> NaiveDateTime {
        let seconds = (x / self.config.hour_width_px * 3600.0).round() as i64;
        self.origin() + Duration::seconds(seconds)
    }

    /// Pixel width of a job span. An absent end means start + 2h, for
    /// width purposes only.
    pub fn width_for_span(&self, start: NaiveDateTime, end: Option<NaiveDateTime>) -> f64 {
        let end = end.unwrap_or(start + Duration::minutes(DEFAULT_DURATION_MINUTES));
        (end - start).num_seconds() as f64 / 3600.0 * self.config.hour_width_px
    }

    /// Rounds a raw pixel delta to the nearest multiple of the snap
    /// unit (round-to-nearest, not floor/ceil).
    pub fn snap(&self, raw_px: f64) -> f64 {
        let unit = self.config.snap_px();
        (raw_px / unit).round() * unit
    }

    /// Converts a snapped pixel delta to whole minutes.
    pub fn minutes_for_px(&self, px: f64) -> i64 {
        (px / self.config.hour_width_px * 60.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TimeGrid {
        TimeGrid::new(GridConfig::default(), NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let c = GridConfig::default();
        assert_eq!(c.start_hour, 8);
        assert_eq!(c.end_hour, 18);
        assert!((c.snap_px() - 20.0).abs() < 1e-10); // 10min of a 120px hour
        assert!((c.visible_width_px() - 1200.0).abs() < 1e-10);
    }

    #[test]
    fn test_x_for_time() {
        let g = grid();
        assert!((g.x_for_time(at(8, 0)) - 0.0).abs() < 1e-10);
        assert!((g.x_for_time(at(9, 0)) - 120.0).abs() < 1e-10);
        assert!((g.x_for_time(at(9, 30)) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_x_for_time_unclamped() {
        let g = grid();
        // Before the visible start: negative, not clamped to zero.
        assert!((g.x_for_time(at(7, 0)) - (-120.0)).abs() < 1e-10);
        // Past the visible end: extends beyond the grid.
        assert!((g.x_for_time(at(20, 0)) - 1440.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_trip() {
        let g = grid();
        for t in [at(8, 0), at(9, 17), at(12, 45), at(17, 59), at(6, 30), at(21, 5)] {
            assert_eq!(g.time_for_x(g.x_for_time(t)), t);
        }
    }

    #[test]
    fn test_width_for_span() {
        let g = grid();
        assert!((g.width_for_span(at(9, 0), Some(at(11, 0))) - 240.0).abs() < 1e-10);
        assert!((g.width_for_span(at(9, 0), Some(at(9, 10))) - 20.0).abs() < 1e-10);
        // Open-ended span: 2h default.
        assert!((g.width_for_span(at(9, 0), None) - 240.0).abs() < 1e-10);
    }

    #[test]
    fn test_snap_round_to_nearest() {
        let g = grid(); // snap_px = 20
        assert!((g.snap(47.0) - 40.0).abs() < 1e-10);
        assert!((g.snap(50.0) - 60.0).abs() < 1e-10); // .5 rounds up
        assert!((g.snap(-47.0) - (-40.0)).abs() < 1e-10);
        assert!((g.snap(9.9) - 0.0).abs() < 1e-10);
        assert!((g.snap(0.0) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_minutes_for_px() {
        let g = grid();
        assert_eq!(g.minutes_for_px(40.0), 20);
        assert_eq!(g.minutes_for_px(-40.0), -20);
        assert_eq!(g.minutes_for_px(0.0), 0);
        assert_eq!(g.minutes_for_px(120.0), 60);
    }

    #[test]
    fn test_well_formed() {
        assert!(GridConfig::default().is_well_formed());
        let inverted = GridConfig { start_hour: 18, end_hour: 8, ..GridConfig::default() };
        assert!(!inverted.is_well_formed());
        let flat = GridConfig { hour_width_px: 0.0, ..GridConfig::default() };
        assert!(!flat.is_well_formed());
        let no_snap = GridConfig { snap_minutes: 0, ..GridConfig::default() };
        assert!(!no_snap.is_well_formed());
    }
}
