//! Waterfall grid builder.

use crate::error::{GridError, GridResult};
use crate::grid::renderer::TrackRenderer;
use crate::model::axis::AxisConfiguration;
use crate::model::track::TrackInfo;
use crate::settings::GridSettings;
use crate::view::strided::{locate, IndexedSource, StridedGroupView};
use log::debug;
use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;
use std::time::Instant;

/// A source dealt round-robin across the tracks of an axis configuration.
///
/// The grid borrows both the configuration and the source for one render
/// pass; rebuild it whenever either changes.
///
/// ```
/// use waterfall_core::{AxisConfiguration, WaterfallGrid};
///
/// let axis = AxisConfiguration::uniform_columns(3);
/// let items: Vec<u32> = (0..7).collect();
/// let grid = WaterfallGrid::new(&axis, &items);
///
/// let columns: Vec<Vec<u32>> = grid.tracks().map(|track| track.view().to_vec()).collect();
/// assert_eq!(columns, vec![vec![0, 3, 6], vec![1, 4], vec![2, 5]]);
/// ```
pub struct WaterfallGrid<'a, S: ?Sized> {
    axis: &'a AxisConfiguration,
    source: &'a S,
    spacing: Option<f64>,
}

impl<'a, S: IndexedSource + ?Sized> WaterfallGrid<'a, S> {
    pub fn new(axis: &'a AxisConfiguration, source: &'a S) -> Self {
        Self {
            axis,
            source,
            spacing: None,
        }
    }

    /// Sets the spacing between tracks (`None` = renderer default).
    #[must_use]
    pub fn with_spacing(mut self, spacing: Option<f64>) -> Self {
        self.spacing = spacing;
        self
    }

    /// Uses `settings.spacing` as the spacing between tracks.
    ///
    /// # Errors
    /// - `GridError::InvalidSpacing` when `settings` fail validation.
    pub fn with_settings(self, settings: &GridSettings) -> GridResult<Self> {
        settings.validate()?;
        Ok(self.with_spacing(Some(settings.spacing)))
    }

    pub fn axis(&self) -> &'a AxisConfiguration {
        self.axis
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Spacing between tracks.
    pub fn spacing(&self) -> Option<f64> {
        self.spacing
    }

    /// Number of tracks, i.e. the axis' `items_count()`.
    pub fn track_count(&self) -> usize {
        self.axis.items_count()
    }

    pub fn is_vertical(&self) -> bool {
        self.axis.is_vertical()
    }

    /// Descriptor and view for track `index`.
    ///
    /// # Errors
    /// - `GridError::TrackOutOfRange` when `index >= track_count()`.
    pub fn track(&self, index: usize) -> GridResult<TrackInfo<'a, S>> {
        let items_count = self.track_count();
        let spec = self
            .axis
            .track(index)
            .ok_or(GridError::TrackOutOfRange { index, items_count })?;
        let view = StridedGroupView::try_new(self.source, index, items_count)?;
        Ok(TrackInfo::new(spec, view))
    }

    /// Every track in index order.
    pub fn tracks(&self) -> GridTracks<'a, S> {
        GridTracks {
            grid: *self,
            next_index: 0,
        }
    }

    /// Track and local position of the element at `flat_index`.
    ///
    /// Returns `None` when the index is past the end of the source or the grid
    /// has no tracks.
    pub fn locate(&self, flat_index: usize) -> Option<(usize, usize)> {
        if flat_index >= self.source.len() {
            return None;
        }
        locate(flat_index, self.track_count())
    }

    /// Runs one render pass, calling `renderer` once per track in index
    /// order, and returns the outputs in the same order.
    ///
    /// # Side effects
    /// - Emits `grid_render` debug events with track count and duration.
    pub fn render<R>(&self, renderer: &mut R) -> Vec<R::Output>
    where
        R: TrackRenderer<S>,
    {
        self.render_pass(|track| renderer.render_track(track))
    }

    /// Same as [`Self::render`] with a closure as the renderer.
    pub fn render_with<F, O>(&self, render_track: F) -> Vec<O>
    where
        F: FnMut(TrackInfo<'a, S>) -> O,
    {
        self.render_pass(render_track)
    }

    fn render_pass<F, O>(&self, render_track: F) -> Vec<O>
    where
        F: FnMut(TrackInfo<'a, S>) -> O,
    {
        let started_at = Instant::now();
        debug!(
            "event=grid_render module=grid status=start orientation={} tracks={} items={}",
            orientation_label(self.axis),
            self.track_count(),
            self.source.len()
        );

        let outputs: Vec<O> = self.tracks().map(render_track).collect();

        debug!(
            "event=grid_render module=grid status=ok tracks={} duration_us={}",
            outputs.len(),
            started_at.elapsed().as_micros()
        );
        outputs
    }
}

fn orientation_label(axis: &AxisConfiguration) -> &'static str {
    match axis {
        AxisConfiguration::Columns(_) => "columns",
        AxisConfiguration::Rows(_) => "rows",
    }
}

impl<S: ?Sized> Clone for WaterfallGrid<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for WaterfallGrid<'_, S> {}

impl<S: ?Sized> Debug for WaterfallGrid<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaterfallGrid")
            .field("axis", self.axis)
            .field("spacing", &self.spacing)
            .finish_non_exhaustive()
    }
}

/// Iterator over the tracks of a grid. Created by [`WaterfallGrid::tracks`].
pub struct GridTracks<'a, S: ?Sized> {
    grid: WaterfallGrid<'a, S>,
    next_index: usize,
}

impl<S: ?Sized> Debug for GridTracks<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridTracks")
            .field("next_index", &self.next_index)
            .field("track_count", &self.grid.axis.items_count())
            .finish()
    }
}

impl<'a, S: IndexedSource + ?Sized> Iterator for GridTracks<'a, S> {
    type Item = TrackInfo<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let track = self.grid.track(self.next_index).ok()?;
        self.next_index += 1;
        Some(track)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.track_count().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl<S: IndexedSource + ?Sized> ExactSizeIterator for GridTracks<'_, S> {}

impl<S: IndexedSource + ?Sized> FusedIterator for GridTracks<'_, S> {}
