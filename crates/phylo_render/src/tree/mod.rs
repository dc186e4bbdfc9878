//! Tree structure access for the render core
//!
//! The renderer never owns the tree; the loading collaborator builds a
//! [`TreeArena`] once and the render core only reads it during a frame.

mod arena;

pub use arena::{Ancestors, NodeId, TreeArena, TreeError};

pub(crate) use arena::metadata_key;
