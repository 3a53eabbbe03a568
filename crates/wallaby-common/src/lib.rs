//! Common utilities for the wallaby selector library.
//!
//! This crate provides the shared infrastructure used by the selector crate
//! and its callers:
//! - **Geometry** - plain value objects (rectangles) with serde support
//! - **JSON helpers** - generic object/JSON round-trip functions
//! - **Warning System** - colored terminal output for non-fatal diagnostics

pub mod geometry;
pub mod json;
pub mod warning;
