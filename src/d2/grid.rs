use ndarray::Array2;

/// Cell layout of the simulation: `cols x rows` interior cells surrounded by
/// a one-cell ghost border.
///
/// Fields are `(rows + 2, cols + 2)` arrays in standard layout, so `[[y, x]]`
/// and the flat [`Grid::index`] address the same element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Grid covering a `width x height` pixel viewport with square cells of
    /// `cell_size` pixels. Partial cells at the right and bottom are dropped.
    pub fn from_viewport(width: f64, height: f64, cell_size: f64) -> Self {
        let fit = |extent: f64| {
            let n = (extent / cell_size).floor();
            if n.is_finite() && n > 0.0 {
                n as usize
            } else {
                0
            }
        };

        Self::new(fit(width), fit(height))
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of elements in every field, ghost border included.
    pub fn size(&self) -> usize {
        (self.cols + 2) * (self.rows + 2)
    }

    pub fn dim(&self) -> (usize, usize) {
        (self.rows + 2, self.cols + 2)
    }

    /// A grid without interior cells cannot be simulated or drawn.
    pub fn is_degenerate(&self) -> bool {
        self.cols == 0 || self.rows == 0
    }

    fn clamp(&self, x: isize, y: isize) -> (usize, usize) {
        let x = x.clamp(0, self.cols as isize + 1) as usize;
        let y = y.clamp(0, self.rows as isize + 1) as usize;
        (x, y)
    }

    /// Flat offset of cell `(x, y)`. Out of range coordinates are clamped
    /// onto the ghost border.
    pub fn index(&self, x: isize, y: isize) -> usize {
        let (x, y) = self.clamp(x, y);
        x + (self.cols + 2) * y
    }

    /// Same as [`Grid::index`] but as an ndarray index into a field.
    pub fn cell(&self, x: isize, y: isize) -> [usize; 2] {
        let (x, y) = self.clamp(x, y);
        [y, x]
    }

    pub fn is_interior(&self, x: isize, y: isize) -> bool {
        x >= 1 && y >= 1 && x <= self.cols as isize && y <= self.rows as isize
    }

    pub fn zeros(&self) -> Array2<f64> {
        Array2::zeros(self.dim())
    }
}
