//! Board graph, layouts and the builder that turns one into the other.
//!
//! - `Layout`: declarative slot positions per layer plus a coverage rule
//! - `BoardBuilder`: deals tile kinds onto a layout and wires relations
//! - `Board`: the tile arena with free-tile and match queries

pub mod builder;
pub mod graph;
pub mod layout;

pub use builder::BoardBuilder;
pub use graph::Board;
pub use layout::{CoverLink, Coverage, Layout};
