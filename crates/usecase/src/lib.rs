//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`traverser`]: depth-first walk that sums route elements
//! - [`dto`]: serializable report handed to the presentation layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod traverser;

pub use dto::{ReportedFile, ScanReport};
pub use traverser::CountRoutes;
