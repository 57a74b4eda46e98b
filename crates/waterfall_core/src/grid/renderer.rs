//! Rendering collaborator contract.

use crate::model::track::TrackInfo;
use crate::view::strided::IndexedSource;

/// Consumes one track per call and produces whatever the host renders.
///
/// Implementations must iterate `track.view()` in order and must not try to
/// mutate the source through it.
///
/// Closures can be used directly through `WaterfallGrid::render_with`.
pub trait TrackRenderer<S: IndexedSource + ?Sized> {
    type Output;

    fn render_track(&mut self, track: TrackInfo<'_, S>) -> Self::Output;
}
