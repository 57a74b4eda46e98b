//! Core layout logic for waterfall grids.
//! This crate is the single source of truth for track partitioning invariants.

pub mod error;
pub mod grid;
pub mod logging;
pub mod model;
pub mod settings;
pub mod view;

pub use error::{GridError, GridResult};
pub use grid::renderer::TrackRenderer;
pub use grid::waterfall::{GridTracks, WaterfallGrid};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::alignment::{HorizontalAlignment, VerticalAlignment};
pub use model::axis::{AxisConfiguration, ColumnSpec, RowSpec, Tracks};
pub use model::track::{TrackInfo, TrackSpec};
pub use settings::{GridSettings, DEFAULT_ITEM_SPACING, DEFAULT_TRACK_SPACING};
pub use view::strided::{
    group_len, locate, strided_groups, IndexedSource, StridedGroupView, StridedGroups,
    StridedIter, StridedSource,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
