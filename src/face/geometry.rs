// src/face/geometry.rs
//
// Geometry of a face: the mapping between cubelet coordinates and pixels.
// Pointer hit tests and cubelet placement both go through here.

use crate::cell::Placement;

/// Size of a face in cubelets and of a cubelet in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Number of cubelets along each edge.
    pub cubes_per_side: usize,

    /// Edge length of a single cubelet in pixels.
    pub cubelet_px: usize,
}

impl Geometry {
    pub fn new(cubes_per_side: usize, cubelet_px: usize) -> Self {
        Self {
            cubes_per_side,
            cubelet_px,
        }
    }

    /// Converts a pointer position relative to the face's top-left corner
    /// into a cubelet coordinate.
    ///
    /// # Returns
    /// * `Some((row, col))` if the position lies on the face
    /// * `None` if it lies outside
    pub fn pixels_to_cell(&self, x_px: i64, y_px: i64) -> Option<(usize, usize)> {
        if x_px < 0 || y_px < 0 {
            return None;
        }

        let size = self.cubelet_px.max(1);
        let col = x_px as usize / size;
        let row = y_px as usize / size;

        if col >= self.cubes_per_side || row >= self.cubes_per_side {
            return None;
        }

        Some((row, col))
    }

    /// Top-left corner of a cubelet as `(left_px, top_px)`.
    pub fn cell_to_pixels(&self, row: usize, col: usize) -> (usize, usize) {
        (col * self.cubelet_px, row * self.cubelet_px)
    }

    /// Edge length of the whole face in pixels.
    pub fn side_px(&self) -> usize {
        self.cubes_per_side * self.cubelet_px
    }

    /// Position and background offset of a cubelet.
    pub fn placement(&self, row: usize, col: usize) -> Placement {
        let (left, top) = self.cell_to_pixels(row, col);
        Placement {
            top_px: top as i64,
            left_px: left as i64,
            background_x_px: -(left as i64),
            background_y_px: -(top as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixels_to_cell_basic() {
        let geometry = Geometry::new(20, 20);

        assert_eq!(geometry.pixels_to_cell(0, 0), Some((0, 0)));
        assert_eq!(geometry.pixels_to_cell(19, 19), Some((0, 0)));
        assert_eq!(geometry.pixels_to_cell(20, 0), Some((0, 1)));
        assert_eq!(geometry.pixels_to_cell(0, 20), Some((1, 0)));
        assert_eq!(geometry.pixels_to_cell(395, 239), Some((11, 19)));
    }

    #[test]
    fn test_pixels_to_cell_out_of_bounds() {
        let geometry = Geometry::new(20, 20);

        assert_eq!(geometry.pixels_to_cell(400, 0), None);
        assert_eq!(geometry.pixels_to_cell(0, 400), None);
        assert_eq!(geometry.pixels_to_cell(-1, 5), None);
    }

    #[test]
    fn test_placement_offsets_background() {
        let geometry = Geometry::new(20, 20);
        let p = geometry.placement(2, 3);
        assert_eq!((p.left_px, p.top_px), (60, 40));
        assert_eq!((p.background_x_px, p.background_y_px), (-60, -40));
        assert_eq!(geometry.side_px(), 400);
    }
}
