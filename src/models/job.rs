//! Job (booking) model.
//!
//! A job is a scheduled unit of work: one cleaning/turnover visit with
//! a time interval, a status, and one or more assigned resources. Jobs
//! are supplied fresh on every render; the engine holds no cache and
//! never mutates the supplied list, it only emits update requests.
//!
//! # Time Model
//! Wall-clock `chrono::NaiveDateTime`, interpreted within one visible
//! day. A missing `end_time` is not an error: layout and drag math
//! assume a 2-hour default duration, but that synthetic end is never
//! written back as if it were data.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Default duration assumed when a job has no explicit end time.
pub const DEFAULT_DURATION_MINUTES: i64 = 120;

/// A scheduled booking rendered as one block in the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Assigned resource IDs. The first entry is the primary resource
    /// and decides which row the block is drawn in.
    pub resource_ids: Vec<String>,
    /// Scheduled start.
    pub start_time: NaiveDateTime,
    /// Scheduled end. Absent = open-ended; treated as start + 2h for
    /// layout and drag purposes only.
    pub end_time: Option<NaiveDateTime>,
    /// Workflow status.
    pub status: JobStatus,
    /// Quoted price. Display only.
    pub price: f64,
    /// Property/customer label. Display only.
    pub label: String,
}

/// Workflow status of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
    Other,
}

impl Job {
    /// Creates a new pending job.
    pub fn new(id: impl Into<String>, start_time: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            resource_ids: Vec::new(),
            start_time,
            end_time: None,
            status: JobStatus::Pending,
            price: 0.0,
            label: String::new(),
        }
    }

    /// Assigns a resource (appended; the first assigned is primary).
    pub fn with_resource(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_ids.push(resource_id.into());
        self
    }

    /// Sets the end time.
    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Sets the property/customer label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The resource whose row this job is drawn in.
    ///
    /// Multi-resource jobs are only ever drawn in the row of their
    /// first listed resource.
    pub fn primary_resource(&self) -> Option<&str> {
        self.resource_ids.first().map(String::as_str)
    }

    /// End time used for layout and drag math: the explicit end, or
    /// start + 2h when none is set.
    #[inline]
    pub fn effective_end(&self) -> NaiveDateTime {
        self.end_time
            .unwrap_or(self.start_time + Duration::minutes(DEFAULT_DURATION_MINUTES))
    }

    /// Duration used for layout and drag math.
    #[inline]
    pub fn effective_duration(&self) -> Duration {
        self.effective_end() - self.start_time
    }

    /// Whether the explicit interval is well-formed (end after start).
    /// Open-ended jobs are always well-formed.
    pub fn has_valid_interval(&self) -> bool {
        match self.end_time {
            Some(end) => end > self.start_time,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_job_builder() {
        let j = Job::new("job-1", at(9, 0))
            .with_resource("emp-1")
            .with_resource("emp-2")
            .with_end_time(at(11, 30))
            .with_status(JobStatus::Confirmed)
            .with_price(140.0)
            .with_label("Seaview Loft 4B");

        assert_eq!(j.id, "job-1");
        assert_eq!(j.primary_resource(), Some("emp-1"));
        assert_eq!(j.resource_ids.len(), 2);
        assert_eq!(j.end_time, Some(at(11, 30)));
        assert_eq!(j.status, JobStatus::Confirmed);
        assert_eq!(j.label, "Seaview Loft 4B");
    }

    #[test]
    fn test_effective_end_default() {
        let j = Job::new("job-1", at(9, 0));
        assert_eq!(j.end_time, None);
        assert_eq!(j.effective_end(), at(11, 0));
        assert_eq!(j.effective_duration(), Duration::minutes(120));
    }

    #[test]
    fn test_effective_end_explicit() {
        let j = Job::new("job-1", at(9, 0)).with_end_time(at(9, 40));
        assert_eq!(j.effective_end(), at(9, 40));
        assert_eq!(j.effective_duration(), Duration::minutes(40));
    }

    #[test]
    fn test_primary_resource_empty() {
        let j = Job::new("job-1", at(9, 0));
        assert_eq!(j.primary_resource(), None);
    }

    #[test]
    fn test_interval_validity() {
        assert!(Job::new("a", at(9, 0)).has_valid_interval());
        assert!(Job::new("b", at(9, 0)).with_end_time(at(10, 0)).has_valid_interval());
        assert!(!Job::new("c", at(9, 0)).with_end_time(at(9, 0)).has_valid_interval());
        assert!(!Job::new("d", at(9, 0)).with_end_time(at(8, 0)).has_valid_interval());
    }

    #[test]
    fn test_status_serde_tags() {
        let json = serde_json::to_string(&JobStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let back: JobStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, JobStatus::Cancelled);
    }
}
