//! Host-facing grid layout defaults.
//!
//! # Responsibility
//! - Carry the spacing values a host applies to every grid it builds.
//! - Validate values received from host configuration before use.
//!
//! # Invariants
//! - Validated settings only contain finite, non-negative spacings.
//! - Missing fields deserialize to the defaults below.

use crate::error::{GridError, GridResult};
use crate::model::axis::AxisConfiguration;
use serde::{Deserialize, Serialize};

/// Default spacing between tracks.
pub const DEFAULT_TRACK_SPACING: f64 = 10.0;
/// Default spacing between consecutive items inside a track.
pub const DEFAULT_ITEM_SPACING: f64 = 10.0;

/// Spacing applied by a host to the grids it renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Space between neighbouring columns (or rows).
    pub spacing: f64,
    /// Space between consecutive items inside one column (or row).
    pub item_spacing: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_TRACK_SPACING,
            item_spacing: DEFAULT_ITEM_SPACING,
        }
    }
}

impl GridSettings {
    /// Checks that both spacings are finite and non-negative.
    ///
    /// # Errors
    /// - `GridError::InvalidSpacing` naming the first offending field.
    pub fn validate(&self) -> GridResult<()> {
        validate_spacing("spacing", self.spacing)?;
        validate_spacing("item_spacing", self.item_spacing)?;
        Ok(())
    }

    /// Applies `item_spacing` to every track of `axis`.
    ///
    /// # Errors
    /// - Returns the validation error and leaves `axis` untouched when the
    ///   settings are invalid.
    pub fn apply_to(&self, axis: &mut AxisConfiguration) -> GridResult<()> {
        self.validate()?;
        axis.set_all_spacings(self.item_spacing);
        Ok(())
    }
}

fn validate_spacing(field: &'static str, value: f64) -> GridResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidSpacing { field, value })
    }
}
