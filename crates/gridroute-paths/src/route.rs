use std::fmt;

use gridroute_core::{Point, index_to_point};

use crate::error::{PathError, Result};

/// A found route: linear cell indices from start to target, both included.
///
/// A search whose start equals its target yields an empty route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    cells: Vec<usize>,
}

impl Route {
    pub(crate) fn new(cells: Vec<usize>) -> Self {
        Self { cells }
    }

    /// Number of cells in the route.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// First cell, or `None` for an empty route.
    #[inline]
    pub fn start(&self) -> Option<usize> {
        self.cells.first().copied()
    }

    /// Last cell, or `None` for an empty route.
    #[inline]
    pub fn target(&self) -> Option<usize> {
        self.cells.last().copied()
    }

    pub fn into_cells(self) -> Vec<usize> {
        self.cells
    }

    /// The route's cells as points of a grid `width` cells wide.
    pub fn points(&self, width: usize) -> Vec<Point> {
        self.cells
            .iter()
            .map(|&c| index_to_point(width, c))
            .collect()
    }

    /// Whether every consecutive pair of cells is one orthogonal step apart.
    pub fn is_connected(&self, width: usize) -> bool {
        self.cells
            .windows(2)
            .all(|w| index_to_point(width, w[0]).is_adjacent(index_to_point(width, w[1])))
    }

    /// Copy the route into the front of `out`, returning its length.
    ///
    /// `out` is left untouched when it is too short.
    pub fn write_into(&self, out: &mut [usize]) -> Result<usize> {
        self.check_capacity(out.len())?;
        out[..self.cells.len()].copy_from_slice(&self.cells);
        Ok(self.cells.len())
    }

    pub(crate) fn check_capacity(&self, capacity: usize) -> Result<()> {
        if self.cells.len() > capacity {
            return Err(PathError::BufferTooSmall {
                needed: self.cells.len(),
                capacity,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Path size = {}", self.cells.len())?;
        f.write_str("[")?;
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
