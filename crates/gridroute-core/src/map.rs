//! The [`PassMap`] type — a read-only passability view over caller bytes.

use crate::error::{MapError, Result};
use crate::geom::{Point, Range};
use crate::index::{index_to_point, point_to_index};

/// Cell value marking a traversable tile. Any other byte is blocked.
pub const PASSABLE: u8 = 1;

/// A validated, borrowed, row-major grid of passability bytes.
///
/// The map never owns or copies the cells; it lives only as long as the
/// caller's slice.
#[derive(Debug, Clone, Copy)]
pub struct PassMap<'a> {
    cells: &'a [u8],
    width: usize,
    height: usize,
}

#[allow(clippy::len_without_is_empty)]
impl<'a> PassMap<'a> {
    /// Wrap `cells` as a `width` x `height` map.
    ///
    /// Fails when either dimension is not positive, when the cell count does
    /// not fit in `usize`, or when `cells.len()` differs from
    /// `width * height`.
    pub fn new(cells: &'a [u8], width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        }
        let (w, h) = (width as usize, height as usize);
        let expected = w
            .checked_mul(h)
            .ok_or(MapError::TooLarge { width: w, height: h })?;
        if cells.len() != expected {
            return Err(MapError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width: w,
            height: h,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The map's bounds, anchored at the origin.
    #[inline]
    pub fn range(&self) -> Range {
        Range::with_size(self.width as i32, self.height as i32)
    }

    /// Whether `p` lies inside the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// Linear index of `p`, or `None` when `p` is out of bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| point_to_index(self.width, p))
    }

    /// Point of a linear index. `index` must be below [`len`](Self::len).
    #[inline]
    pub fn point_of(&self, index: usize) -> Point {
        index_to_point(self.width, index)
    }

    /// Whether cell `index` is traversable. Out-of-range indices are blocked.
    #[inline]
    pub fn is_passable(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&PASSABLE)
    }

    /// Whether the cell at `p` is traversable. Out-of-bounds points are blocked.
    #[inline]
    pub fn is_passable_at(&self, p: Point) -> bool {
        self.index_of(p).is_some_and(|i| self.is_passable(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [u8; 12] = [1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1, 1];

    #[test]
    fn test_new_and_size() {
        let m = PassMap::new(&SAMPLE, 4, 3).unwrap();
        assert_eq!(m.width(), 4);
        assert_eq!(m.height(), 3);
        assert_eq!(m.len(), 12);
        assert_eq!(m.range(), Range::with_size(4, 3));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert_eq!(
            PassMap::new(&[], 0, 3).unwrap_err(),
            MapError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
        assert!(matches!(
            PassMap::new(&SAMPLE, 4, -3),
            Err(MapError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert_eq!(
            PassMap::new(&SAMPLE, 5, 3).unwrap_err(),
            MapError::SizeMismatch {
                expected: 15,
                actual: 12
            }
        );
    }

    #[test]
    fn test_passability() {
        let m = PassMap::new(&SAMPLE, 4, 3).unwrap();
        assert!(m.is_passable(0));
        assert!(!m.is_passable(4));
        assert!(!m.is_passable(12));
        assert!(m.is_passable_at(Point::new(1, 2)));
        assert!(!m.is_passable_at(Point::new(0, 2)));
        assert!(!m.is_passable_at(Point::new(4, 0)));
        assert!(!m.is_passable_at(Point::new(-1, 0)));
    }

    #[test]
    fn test_only_one_means_passable() {
        let cells = [2, 255, 1, 0];
        let m = PassMap::new(&cells, 2, 2).unwrap();
        assert!(!m.is_passable(0));
        assert!(!m.is_passable(1));
        assert!(m.is_passable(2));
        assert!(!m.is_passable(3));
    }

    #[test]
    fn test_index_point_mapping() {
        let m = PassMap::new(&SAMPLE, 4, 3).unwrap();
        assert_eq!(m.index_of(Point::new(1, 2)), Some(9));
        assert_eq!(m.index_of(Point::new(4, 2)), None);
        assert_eq!(m.index_of(Point::new(0, -1)), None);
        assert_eq!(m.point_of(9), Point::new(1, 2));
    }
}
