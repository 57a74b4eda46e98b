//! Per-track descriptors handed to renderers.
//!
//! # Invariants
//! - A `TrackInfo` is derived for one render pass and never mutated.
//! - `TrackInfo::index < TrackInfo::items_count`.

use crate::model::axis::{ColumnSpec, RowSpec};
use crate::view::strided::{IndexedSource, StridedGroupView};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Layout descriptor of one track, tagged by orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSpec {
    Column(ColumnSpec),
    Row(RowSpec),
}

impl TrackSpec {
    /// Spacing override between consecutive items of the track.
    pub fn spacing(&self) -> Option<f64> {
        match self {
            Self::Column(column) => column.spacing,
            Self::Row(row) => row.spacing,
        }
    }

    pub fn column(&self) -> Option<&ColumnSpec> {
        match self {
            Self::Column(column) => Some(column),
            Self::Row(_) => None,
        }
    }

    pub fn row(&self) -> Option<&RowSpec> {
        match self {
            Self::Column(_) => None,
            Self::Row(row) => Some(row),
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

/// Everything a renderer needs to draw one full column or row.
pub struct TrackInfo<'a, S: ?Sized> {
    spec: TrackSpec,
    index: usize,
    items_count: usize,
    view: StridedGroupView<'a, S>,
}

impl<'a, S: IndexedSource + ?Sized> TrackInfo<'a, S> {
    pub(crate) fn new(spec: TrackSpec, view: StridedGroupView<'a, S>) -> Self {
        Self {
            spec,
            index: view.group(),
            items_count: view.total_groups(),
            view,
        }
    }

    /// Descriptor of the track being rendered.
    pub fn spec(&self) -> TrackSpec {
        self.spec
    }

    /// Index of the track in `[0, items_count)`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of tracks in the grid.
    pub fn items_count(&self) -> usize {
        self.items_count
    }

    /// Elements assigned to this track, in order.
    pub fn view(&self) -> StridedGroupView<'a, S> {
        self.view
    }

    /// The column descriptor when this track is a column.
    pub fn column(&self) -> Option<&ColumnSpec> {
        self.spec.column()
    }

    /// The row descriptor when this track is a row.
    pub fn row(&self) -> Option<&RowSpec> {
        self.spec.row()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.items_count
    }
}

impl<S: ?Sized> Clone for TrackInfo<'_, S> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec,
            index: self.index,
            items_count: self.items_count,
            view: self.view,
        }
    }
}

impl<S, U> PartialEq<TrackInfo<'_, U>> for TrackInfo<'_, S>
where
    S: IndexedSource + ?Sized,
    U: IndexedSource + ?Sized,
    S::Item: PartialEq<U::Item>,
{
    fn eq(&self, other: &TrackInfo<'_, U>) -> bool {
        self.spec == other.spec
            && self.index == other.index
            && self.items_count == other.items_count
            && self.view == other.view
    }
}

impl<S> Debug for TrackInfo<'_, S>
where
    S: IndexedSource + ?Sized,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackInfo")
            .field("spec", &self.spec)
            .field("index", &self.index)
            .field("items_count", &self.items_count)
            .field("view", &self.view)
            .finish()
    }
}
