//! Error taxonomy for grid views and axis configuration.
//!
//! # Responsibility
//! - Give every violated precondition a distinguishable error value.
//! - Keep messages stable enough for diagnostics and tests.
//!
//! # Invariants
//! - Index errors are reported, never clamped or wrapped.
//! - Errors carry the offending value and the bound it violated.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type GridResult<T> = Result<T, GridError>;

/// Failure raised by strided views, axis mutators and settings validation.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// A view was requested over zero groups.
    InvalidGroupCount { total_groups: usize },
    /// A view was requested for a group outside `[0, total_groups)`.
    GroupOutOfRange { group: usize, total_groups: usize },
    /// A local index outside `[0, len)` was accessed through a view.
    IndexOutOfBounds { index: usize, len: usize },
    /// A per-track operation addressed a track that does not exist.
    TrackOutOfRange { index: usize, items_count: usize },
    /// A spacing value was negative or not finite.
    InvalidSpacing { field: &'static str, value: f64 },
}

impl GridError {
    /// Returns whether this error comes from a construction-time precondition.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidGroupCount { .. } | Self::GroupOutOfRange { .. }
        )
    }
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGroupCount { total_groups } => {
                write!(f, "total group count must be >= 1, got {total_groups}")
            }
            Self::GroupOutOfRange {
                group,
                total_groups,
            } => write!(
                f,
                "group {group} is out of range for {total_groups} total groups"
            ),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds for view of length {len}")
            }
            Self::TrackOutOfRange { index, items_count } => write!(
                f,
                "track index {index} is out of range for {items_count} tracks"
            ),
            Self::InvalidSpacing { field, value } => {
                write!(f, "{field} must be a finite value >= 0, got {value}")
            }
        }
    }
}

impl Error for GridError {}
