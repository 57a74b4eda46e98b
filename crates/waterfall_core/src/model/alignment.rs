//! Cross-axis alignment of items inside one track.

use serde::{Deserialize, Serialize};

/// Horizontal placement of each item inside a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

/// Vertical placement of each item inside a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}
