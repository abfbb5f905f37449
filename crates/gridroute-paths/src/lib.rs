//! Best-first route search on passability grids.
//!
//! A grid is a row-major slice of bytes where `1` marks a passable cell. The
//! search moves orthogonally only, scores cells with the Manhattan distance,
//! and returns routes as linear cell indices from start to target.
//!
//! Two surfaces are provided:
//!
//! | Entry point | Input | Output |
//! |---|---|---|
//! | [`find_path`] | raw coordinates, `&[u8]` grid, `&mut [i32]` buffer | length or [`NO_PATH`] |
//! | [`GridPathfinder`] | [`PassMap`](gridroute_core::PassMap), [`Point`](gridroute_core::Point)s | [`Route`] or `None` |
//!
//! Each search owns all of its working state, so searches may run on any
//! number of threads at once. [`LockPolicy::Serialized`] restores the legacy
//! one-search-at-a-time behavior.

mod config;
mod distance;
mod error;
mod finder;
mod neighbors;
mod route;
mod search;

pub use config::{LinkMode, LockPolicy, SearchConfig};
pub use distance::{manhattan, manhattan_idx, manhattan_xy};
pub use error::{Endpoint, PathError, Result};
pub use finder::{GridPathfinder, NO_PATH, find_path};
pub use neighbors::Neighbors;
pub use route::Route;
