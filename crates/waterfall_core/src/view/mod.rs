//! Read-only views that split a flat source into grid tracks.
//!
//! # Responsibility
//! - Expose per-track element sequences without copying source data.
//!
//! # Invariants
//! - Views borrow the caller's source for their whole lifetime.

pub mod strided;
