use gridroute_core::{Point, to_xy};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Manhattan distance between `(x0, y0)` and `(x1, y1)`.
#[inline]
pub fn manhattan_xy(x0: i32, y0: i32, x1: i32, y1: i32) -> i32 {
    (x1 - x0).abs() + (y1 - y0).abs()
}

/// Manhattan distance between two linear cell indices of a grid `width`
/// cells wide.
#[inline]
pub fn manhattan_idx(width: usize, i: usize, j: usize) -> i32 {
    let (x0, y0) = to_xy(width, i);
    let (x1, y1) = to_xy(width, j);
    (x0.abs_diff(x1) + y0.abs_diff(y1)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 2);
        assert_eq!(manhattan(a, b), 3);
        assert_eq!(manhattan(b, a), 3);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn xy_form_handles_negative_deltas() {
        assert_eq!(manhattan_xy(3, 4, 0, 0), 7);
        assert_eq!(manhattan_xy(-2, 1, 2, -1), 6);
    }

    #[test]
    fn index_form_matches_point_form() {
        let width = 4;
        for i in 0..12 {
            for j in 0..12 {
                let a = Point::new((i % width) as i32, (i / width) as i32);
                let b = Point::new((j % width) as i32, (j / width) as i32);
                assert_eq!(manhattan_idx(width, i, j), manhattan(a, b));
            }
        }
    }

    #[test]
    fn index_form_does_not_wrap_rows() {
        // Index 3 is the end of row 0 and index 4 the start of row 1: far
        // apart on the grid despite being consecutive.
        assert_eq!(manhattan_idx(4, 3, 4), 4);
    }
}
