//! Grid layout model.
//!
//! # Responsibility
//! - Define the axis configuration and per-track descriptors consumed by
//!   grid builders and renderers.
//!
//! # Invariants
//! - Model values have value semantics; mutation never aliases another
//!   configuration.
//! - Orientation is a closed two-case enum, matched exhaustively.

pub mod alignment;
pub mod axis;
pub mod track;
