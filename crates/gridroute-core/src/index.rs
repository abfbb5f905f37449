//! Mapping between linear cell indices and 2D grid coordinates.
//!
//! Grids are stored row-major, so cell `(x, y)` lives at `y * width + x`.
//! None of these functions check bounds; callers validate coordinates first
//! (see [`PassMap::index_of`](crate::PassMap::index_of)). All of them require
//! `width > 0`.

use crate::geom::Point;

/// Split a linear index into `(x, y)`.
#[inline]
pub const fn to_xy(width: usize, index: usize) -> (usize, usize) {
    (index % width, index / width)
}

/// Join `(x, y)` into a linear index.
#[inline]
pub const fn to_index(width: usize, x: usize, y: usize) -> usize {
    width * y + x
}

/// Linear index to [`Point`].
#[inline]
pub fn index_to_point(width: usize, index: usize) -> Point {
    let (x, y) = to_xy(width, index);
    Point::new(x as i32, y as i32)
}

/// [`Point`] to linear index. `p` must have non-negative coordinates.
#[inline]
pub fn point_to_index(width: usize, p: Point) -> usize {
    to_index(width, p.x as usize, p.y as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_of_index() {
        assert_eq!(to_xy(4, 0), (0, 0));
        assert_eq!(to_xy(4, 3), (3, 0));
        assert_eq!(to_xy(4, 4), (0, 1));
        assert_eq!(to_xy(4, 9), (1, 2));
    }

    #[test]
    fn index_of_xy() {
        assert_eq!(to_index(4, 0, 0), 0);
        assert_eq!(to_index(4, 1, 2), 9);
        assert_eq!(to_index(3, 2, 0), 2);
        assert_eq!(to_index(3, 0, 2), 6);
    }

    #[test]
    fn conversions_agree_over_a_whole_grid() {
        let width = 7;
        for index in 0..width * 5 {
            let (x, y) = to_xy(width, index);
            assert_eq!(to_index(width, x, y), index);
            assert_eq!(point_to_index(width, index_to_point(width, index)), index);
        }
    }

    #[test]
    fn single_column_grid() {
        assert_eq!(to_xy(1, 5), (0, 5));
        assert_eq!(index_to_point(1, 5), Point::new(0, 5));
    }
}
