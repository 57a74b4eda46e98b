//! Grid axis configuration.
//!
//! # Responsibility
//! - Describe whether a grid grows in columns (vertically) or rows
//!   (horizontally).
//! - Hold one layout descriptor per track and mutate spacing uniformly or per
//!   track.
//!
//! # Invariants
//! - `items_count()` is the length of the active variant's list.
//! - Per-track operations reject indices `>= items_count()` with
//!   `GridError::TrackOutOfRange`; they never clamp.
//! - Copy-returning mutators (`with_*`) never modify the receiver.

use crate::error::{GridError, GridResult};
use crate::model::alignment::{HorizontalAlignment, VerticalAlignment};
use crate::model::track::TrackSpec;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Layout of one column: how each child is placed horizontally and how far
/// apart consecutive children are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(default)]
    pub alignment: HorizontalAlignment,
    /// `None` leaves the spacing to the renderer's default.
    #[serde(default)]
    pub spacing: Option<f64>,
}

impl ColumnSpec {
    pub fn new(alignment: HorizontalAlignment, spacing: Option<f64>) -> Self {
        Self { alignment, spacing }
    }

    /// Centered column using `spacing` between children.
    pub fn spaced(spacing: f64) -> Self {
        Self::new(HorizontalAlignment::default(), Some(spacing))
    }
}

/// Layout of one row: how each child is placed vertically and how far apart
/// consecutive children are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RowSpec {
    #[serde(default)]
    pub alignment: VerticalAlignment,
    /// `None` leaves the spacing to the renderer's default.
    #[serde(default)]
    pub spacing: Option<f64>,
}

impl RowSpec {
    pub fn new(alignment: VerticalAlignment, spacing: Option<f64>) -> Self {
        Self { alignment, spacing }
    }

    /// Centered row using `spacing` between children.
    pub fn spaced(spacing: f64) -> Self {
        Self::new(VerticalAlignment::default(), Some(spacing))
    }
}

/// Growth direction of a grid plus one descriptor per track.
///
/// An empty list is accepted and describes a grid with zero tracks.
///
/// ```
/// use waterfall_core::{AxisConfiguration, RowSpec};
///
/// let axis = AxisConfiguration::Rows(vec![RowSpec::default(); 3])
///     .with_spacing(12.0, 1)
///     .expect("track 1 exists");
/// assert_eq!(axis.spacing_at(1), Ok(Some(12.0)));
/// assert!(axis.is_horizontal());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisConfiguration {
    /// The grid grows vertically; each track is a column.
    Columns(Vec<ColumnSpec>),
    /// The grid grows horizontally; each track is a row.
    Rows(Vec<RowSpec>),
}

impl AxisConfiguration {
    /// `count` centered columns with renderer-default spacing.
    pub fn uniform_columns(count: usize) -> Self {
        Self::Columns(vec![ColumnSpec::default(); count])
    }

    /// `count` centered rows with renderer-default spacing.
    pub fn uniform_rows(count: usize) -> Self {
        Self::Rows(vec![RowSpec::default(); count])
    }

    /// Total number of tracks (columns or rows).
    pub fn items_count(&self) -> usize {
        match self {
            Self::Columns(columns) => columns.len(),
            Self::Rows(rows) => rows.len(),
        }
    }

    /// True when the grid grows in columns.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Columns(_))
    }

    /// True when the grid grows in rows.
    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical()
    }

    /// Column descriptors, or `None` for a row-based grid.
    pub fn columns(&self) -> Option<&[ColumnSpec]> {
        match self {
            Self::Columns(columns) => Some(columns),
            Self::Rows(_) => None,
        }
    }

    /// Row descriptors, or `None` for a column-based grid.
    pub fn rows(&self) -> Option<&[RowSpec]> {
        match self {
            Self::Columns(_) => None,
            Self::Rows(rows) => Some(rows),
        }
    }

    /// Descriptor of track `index`, or `None` when out of range.
    pub fn track(&self, index: usize) -> Option<TrackSpec> {
        match self {
            Self::Columns(columns) => columns.get(index).copied().map(TrackSpec::Column),
            Self::Rows(rows) => rows.get(index).copied().map(TrackSpec::Row),
        }
    }

    /// Descriptors of every track in index order.
    pub fn tracks(&self) -> Tracks<'_> {
        Tracks {
            axis: self,
            next_index: 0,
        }
    }

    /// Spacing override of track `index`.
    ///
    /// # Errors
    /// - `GridError::TrackOutOfRange` when `index >= items_count()`.
    pub fn spacing_at(&self, index: usize) -> GridResult<Option<f64>> {
        self.track(index)
            .map(|track| track.spacing())
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Replaces every track's spacing with `spacing`.
    pub fn set_all_spacings(&mut self, spacing: f64) {
        match self {
            Self::Columns(columns) => {
                for column in columns.iter_mut() {
                    column.spacing = Some(spacing);
                }
            }
            Self::Rows(rows) => {
                for row in rows.iter_mut() {
                    row.spacing = Some(spacing);
                }
            }
        }
        debug!(
            "event=axis_spacing module=model status=ok scope=all tracks={} spacing={}",
            self.items_count(),
            spacing
        );
    }

    /// Replaces the spacing of track `index` only.
    ///
    /// # Errors
    /// - `GridError::TrackOutOfRange` when `index >= items_count()`; the
    ///   configuration is left untouched.
    pub fn set_spacing(&mut self, spacing: f64, index: usize) -> GridResult<()> {
        let items_count = self.items_count();
        let slot = match self {
            Self::Columns(columns) => columns.get_mut(index).map(|column| &mut column.spacing),
            Self::Rows(rows) => rows.get_mut(index).map(|row| &mut row.spacing),
        };
        match slot {
            Some(slot) => {
                *slot = Some(spacing);
                debug!(
                    "event=axis_spacing module=model status=ok scope=track index={} spacing={}",
                    index, spacing
                );
                Ok(())
            }
            None => {
                let err = GridError::TrackOutOfRange { index, items_count };
                warn!(
                    "event=axis_spacing module=model status=error scope=track error_code=track_out_of_range error={}",
                    err
                );
                Err(err)
            }
        }
    }

    /// Returns a copy with every track's spacing replaced by `spacing`.
    #[must_use]
    pub fn with_all_spacings(&self, spacing: f64) -> Self {
        let mut copy = self.clone();
        copy.set_all_spacings(spacing);
        copy
    }

    /// Returns a copy with the spacing of track `index` replaced.
    ///
    /// # Errors
    /// - `GridError::TrackOutOfRange` when `index >= items_count()`.
    pub fn with_spacing(&self, spacing: f64, index: usize) -> GridResult<Self> {
        let mut copy = self.clone();
        copy.set_spacing(spacing, index)?;
        Ok(copy)
    }

    /// Switches orientation while keeping the track count and each track's
    /// spacing. Alignment resets to the new orientation's default.
    #[must_use]
    pub fn flipped(&self) -> Self {
        match self {
            Self::Columns(columns) => Self::Rows(
                columns
                    .iter()
                    .map(|column| RowSpec::new(VerticalAlignment::default(), column.spacing))
                    .collect(),
            ),
            Self::Rows(rows) => Self::Columns(
                rows.iter()
                    .map(|row| ColumnSpec::new(HorizontalAlignment::default(), row.spacing))
                    .collect(),
            ),
        }
    }

    /// Rebuilds the same orientation with `count` default tracks sharing
    /// `spacing`.
    #[must_use]
    pub fn with_track_count(&self, count: usize, spacing: Option<f64>) -> Self {
        match self {
            Self::Columns(_) => Self::Columns(vec![
                ColumnSpec::new(HorizontalAlignment::default(), spacing);
                count
            ]),
            Self::Rows(_) => Self::Rows(vec![
                RowSpec::new(VerticalAlignment::default(), spacing);
                count
            ]),
        }
    }

    fn out_of_range(&self, index: usize) -> GridError {
        GridError::TrackOutOfRange {
            index,
            items_count: self.items_count(),
        }
    }
}

/// Iterator over an axis' track descriptors. Created by
/// [`AxisConfiguration::tracks`].
#[derive(Debug, Clone)]
pub struct Tracks<'a> {
    axis: &'a AxisConfiguration,
    next_index: usize,
}

impl Iterator for Tracks<'_> {
    type Item = TrackSpec;

    fn next(&mut self) -> Option<TrackSpec> {
        let track = self.axis.track(self.next_index)?;
        self.next_index += 1;
        Some(track)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.axis.items_count().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tracks<'_> {}

#[cfg(test)]
mod tests {
    use super::{AxisConfiguration, ColumnSpec, RowSpec};
    use crate::model::alignment::{HorizontalAlignment, VerticalAlignment};

    #[test]
    fn failed_set_spacing_leaves_configuration_untouched() {
        let mut axis = AxisConfiguration::Columns(vec![ColumnSpec::spaced(4.0); 2]);
        let before = axis.clone();
        assert!(axis.set_spacing(9.0, 2).is_err());
        assert_eq!(axis, before);
    }

    #[test]
    fn flipped_resets_alignment_but_keeps_spacing() {
        let axis = AxisConfiguration::Rows(vec![
            RowSpec::new(VerticalAlignment::Top, Some(3.0)),
            RowSpec::new(VerticalAlignment::Bottom, None),
        ]);
        let flipped = axis.flipped();
        assert_eq!(
            flipped.columns().expect("flipped rows become columns"),
            &[
                ColumnSpec::new(HorizontalAlignment::Center, Some(3.0)),
                ColumnSpec::new(HorizontalAlignment::Center, None),
            ]
        );
    }

    #[test]
    fn tracks_reports_exact_length() {
        let axis = AxisConfiguration::uniform_rows(4);
        assert_eq!(axis.tracks().len(), 4);
    }
}
