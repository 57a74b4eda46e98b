//! Grid composition: pairs each track descriptor with its strided view.
//!
//! # Responsibility
//! - Build one `TrackInfo` per track of an `AxisConfiguration`.
//! - Hand tracks to a `TrackRenderer` in index order.
//!
//! # Invariants
//! - Track `i` of `N` always receives the view `(source, group = i, N)`.
//! - The grid only reads the source; rendering policy stays with the caller.

pub mod renderer;
pub mod waterfall;
