use gridroute_core::{to_index, to_xy};

/// Cached orthogonal neighbor computation.
///
/// Emits in-bounds neighbors of a cell index in the fixed order left, right,
/// up, down. Passability is not checked; the search filters on its own. The
/// order is part of the search's deterministic tie-break.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `index` on a `width` x `height` grid.
    pub fn orthogonal(&mut self, index: usize, width: usize, height: usize) -> &[usize] {
        self.buf.clear();
        let (x, y) = to_xy(width, index);
        if x > 0 {
            self.buf.push(to_index(width, x - 1, y));
        }
        if x + 1 < width {
            self.buf.push(to_index(width, x + 1, y));
        }
        if y > 0 {
            self.buf.push(to_index(width, x, y - 1));
        }
        if y + 1 < height {
            self.buf.push(to_index(width, x, y + 1));
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_cell_has_four_in_order() {
        let mut n = Neighbors::new();
        // 3x3 grid, center cell.
        assert_eq!(n.orthogonal(4, 3, 3), &[3, 5, 1, 7]);
    }

    #[test]
    fn corners() {
        let mut n = Neighbors::new();
        assert_eq!(n.orthogonal(0, 3, 3), &[1, 3]);
        assert_eq!(n.orthogonal(2, 3, 3), &[1, 5]);
        assert_eq!(n.orthogonal(6, 3, 3), &[7, 3]);
        assert_eq!(n.orthogonal(8, 3, 3), &[7, 5]);
    }

    #[test]
    fn edges_do_not_wrap_between_rows() {
        let mut n = Neighbors::new();
        // Index 3 on a 4-wide grid is the last cell of row 0; index 4 is not
        // its neighbor.
        assert_eq!(n.orthogonal(3, 4, 3), &[2, 7]);
        assert_eq!(n.orthogonal(4, 4, 3), &[5, 0, 8]);
    }

    #[test]
    fn degenerate_grids() {
        let mut n = Neighbors::new();
        assert!(n.orthogonal(0, 1, 1).is_empty());
        assert_eq!(n.orthogonal(2, 1, 5), &[1, 3]);
        assert_eq!(n.orthogonal(2, 5, 1), &[1, 3]);
    }

    #[test]
    fn buffer_is_reused() {
        let mut n = Neighbors::new();
        assert_eq!(n.orthogonal(4, 3, 3).len(), 4);
        assert_eq!(n.orthogonal(0, 3, 3).len(), 2);
    }
}
