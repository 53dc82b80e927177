//! Row bounds registry and vertical hit-testing.
//!
//! During a drag, the engine must map the pointer's Y coordinate to a
//! candidate resource row. Instead of measuring a UI toolkit's element
//! rectangles on every frame, rows publish their vertical extent to
//! this registry whenever layout changes (mount, unmount, resize), and
//! the drag loop queries it by Y.
//!
//! # Tie-breaking
//! Row bounds should never overlap, but can transiently (e.g. rows
//! added mid-drag, relayout animation in flight). When a Y coordinate
//! falls inside more than one row's stored bounds, the row whose
//! vertical center is closest to the pointer wins — an explicit rule
//! rather than an accident of iteration order.

use serde::{Deserialize, Serialize};

/// Vertical extent of one resource row, in grid-local pixels.
///
/// Half-open interval: includes `top`, excludes `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowBounds {
    /// Top edge (inclusive).
    pub top: f64,
    /// Bottom edge (exclusive).
    pub bottom: f64,
}

impl RowBounds {
    /// Creates new bounds.
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether a Y coordinate falls inside this row.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }

    /// Vertical center of the row.
    #[inline]
    pub fn center(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Keyed collection of row bounds, one entry per mounted resource row.
///
/// Insertion order is preserved so the registry can also serve as the
/// row display order, but hit-testing does not depend on it.
#[derive(Debug, Clone, Default)]
pub struct RowRegistry {
    rows: Vec<(String, RowBounds)>,
}

impl RowRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes (or refreshes) the bounds for a resource row.
    pub fn publish(&mut self, resource_id: impl Into<String>, bounds: RowBounds) {
        let resource_id = resource_id.into();
        match self.rows.iter_mut().find(|(id, _)| *id == resource_id) {
            Some((_, existing)) => *existing = bounds,
            None => self.rows.push((resource_id, bounds)),
        }
    }

    /// Removes a row on unmount. Returns the bounds it held, if any.
    pub fn remove(&mut self, resource_id: &str) -> Option<RowBounds> {
        let idx = self.rows.iter().position(|(id, _)| id == resource_id)?;
        Some(self.rows.remove(idx).1)
    }

    /// Looks up the bounds for a resource.
    pub fn bounds(&self, resource_id: &str) -> Option<&RowBounds> {
        self.rows
            .iter()
            .find(|(id, _)| id == resource_id)
            .map(|(_, b)| b)
    }

    /// Number of mounted rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are mounted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resource IDs in insertion order.
    pub fn resource_ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(id, _)| id.as_str())
    }

    /// Finds the row containing a Y coordinate.
    ///
    /// O(rows) per call; runs on every pointer move during a drag, so
    /// it allocates nothing. Overlapping bounds are tie-broken by
    /// closest row center to `y`.
    pub fn row_at(&self, y: f64) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (id, bounds) in &self.rows {
            if !bounds.contains(y) {
                continue;
            }
            let distance = (bounds.center() - y).abs();
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((id.as_str(), distance)),
            }
        }
        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> RowRegistry {
        let mut reg = RowRegistry::new();
        reg.publish("emp-1", RowBounds::new(0.0, 48.0));
        reg.publish("emp-2", RowBounds::new(48.0, 96.0));
        reg.publish("emp-3", RowBounds::new(96.0, 144.0));
        reg
    }

    #[test]
    fn test_bounds_contains() {
        let b = RowBounds::new(10.0, 20.0);
        assert!(b.contains(10.0));
        assert!(b.contains(19.9));
        assert!(!b.contains(20.0)); // exclusive bottom
        assert!(!b.contains(5.0));
    }

    #[test]
    fn test_row_at_basic() {
        let reg = three_rows();
        assert_eq!(reg.row_at(10.0), Some("emp-1"));
        assert_eq!(reg.row_at(48.0), Some("emp-2"));
        assert_eq!(reg.row_at(140.0), Some("emp-3"));
        assert_eq!(reg.row_at(200.0), None);
        assert_eq!(reg.row_at(-5.0), None);
    }

    #[test]
    fn test_publish_refreshes_in_place() {
        let mut reg = three_rows();
        reg.publish("emp-2", RowBounds::new(200.0, 248.0));
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.row_at(210.0), Some("emp-2"));
        assert_eq!(reg.row_at(50.0), None);
        // Order untouched by refresh.
        let ids: Vec<&str> = reg.resource_ids().collect();
        assert_eq!(ids, vec!["emp-1", "emp-2", "emp-3"]);
    }

    #[test]
    fn test_remove() {
        let mut reg = three_rows();
        assert_eq!(reg.remove("emp-2"), Some(RowBounds::new(48.0, 96.0)));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.row_at(50.0), None);
        assert_eq!(reg.remove("emp-2"), None);
    }

    #[test]
    fn test_overlap_resolved_by_closest_center() {
        let mut reg = RowRegistry::new();
        // Transient overlap: both rows claim [40, 60).
        reg.publish("upper", RowBounds::new(0.0, 60.0)); // center 30
        reg.publish("lower", RowBounds::new(40.0, 100.0)); // center 70
        assert_eq!(reg.row_at(45.0), Some("upper")); // |30-45| < |70-45|
        assert_eq!(reg.row_at(55.0), Some("lower")); // |70-55| < |30-55|
    }

    #[test]
    fn test_empty_registry() {
        let reg = RowRegistry::new();
        assert!(reg.is_empty());
        assert_eq!(reg.row_at(10.0), None);
    }
}
