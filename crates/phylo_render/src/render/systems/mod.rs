//! Frame-time subsystems
//!
//! Currently one subsystem: label placement. Geometry culling is not a
//! subsystem; the visible window gates labels only.

pub mod labels;
