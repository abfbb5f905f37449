//! **gridroute-core** — geometry and passability types for grid pathfinding.
//!
//! This crate provides the foundational types used by `gridroute-paths`:
//! integer points and half-open ranges, the mapping between linear cell
//! indices and 2D coordinates, and [`PassMap`], a validated borrowed view of a
//! row-major grid of passability bytes.

pub mod error;
pub mod geom;
pub mod index;
pub mod map;

pub use error::{MapError, Result};
pub use geom::{Point, Range};
pub use index::{index_to_point, point_to_index, to_index, to_xy};
pub use map::{PASSABLE, PassMap};
