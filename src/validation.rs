//! Input integrity checks for the per-render job/resource arrays.
//!
//! The engine trusts its inputs during a gesture, so hosts should run
//! this pass when data arrives. Detects:
//! - Duplicate resource or job IDs
//! - Jobs with no assigned resource (no row to draw in)
//! - Jobs referencing resources that don't exist
//! - Explicit intervals with end at or before start
//! - Degenerate grid configuration
//!
//! Deliberately not checked: double-booking. Overlapping jobs on one
//! row are the host's policy to accept or reject on commit.

use std::collections::HashSet;

use crate::geometry::GridConfig;
use crate::models::{Job, Resource};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A job references a resource that doesn't exist.
    InvalidResourceReference,
    /// A job has no assigned resources.
    UnassignedJob,
    /// A job's explicit end is at or before its start.
    InvertedInterval,
    /// The grid configuration cannot produce a usable layout.
    InvalidConfig,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates one render's worth of grid input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected
/// issue (never just the first).
pub fn validate_input(
    jobs: &[Job],
    resources: &[Resource],
    config: &GridConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if !config.is_well_formed() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidConfig,
            format!(
                "unusable grid config: hours {}-{}, hour width {}px, snap {}min",
                config.start_hour, config.end_hour, config.hour_width_px, config.snap_minutes
            ),
        ));
    }

    let mut resource_ids = HashSet::new();
    for r in resources {
        if !resource_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate resource ID: {}", r.id),
            ));
        }
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate job ID: {}", job.id),
            ));
        }

        if job.resource_ids.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnassignedJob,
                format!("job '{}' has no assigned resource", job.id),
            ));
        }

        for rid in &job.resource_ids {
            if !resource_ids.contains(rid.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidResourceReference,
                    format!("job '{}' references unknown resource '{}'", job.id, rid),
                ));
            }
        }

        if !job.has_valid_interval() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedInterval,
                format!("job '{}' ends at or before its start", job.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
