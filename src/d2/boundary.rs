use ndarray::Array2;

/// Which wall condition a field obeys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Scalars are copied onto the border (no flux through the walls).
    Scalar,
    /// Horizontal velocity flips sign at the left and right walls.
    Horizontal,
    /// Vertical velocity flips sign at the top and bottom walls.
    Vertical,
}

/// Fill the ghost border of `x` from its interior so the domain behaves as a
/// closed box with free-slip walls.
pub fn set_boundary(b: Boundary, x: &mut Array2<f64>) {
    let (h, w) = x.dim();

    if h < 3 || w < 3 {
        return;
    }

    let (rows, cols) = (h - 2, w - 2);

    let side = if b == Boundary::Horizontal { -1.0 } else { 1.0 };
    for j in 1..=rows {
        x[[j, 0]] = side * x[[j, 1]];
        x[[j, cols + 1]] = side * x[[j, cols]];
    }

    let top = if b == Boundary::Vertical { -1.0 } else { 1.0 };
    for i in 1..=cols {
        x[[0, i]] = top * x[[1, i]];
        x[[rows + 1, i]] = top * x[[rows, i]];
    }

    x[[0, 0]] = 0.5 * (x[[0, 1]] + x[[1, 0]]);
    x[[rows + 1, 0]] = 0.5 * (x[[rows + 1, 1]] + x[[rows, 0]]);
    x[[0, cols + 1]] = 0.5 * (x[[0, cols]] + x[[1, cols + 1]]);
    x[[rows + 1, cols + 1]] = 0.5 * (x[[rows + 1, cols]] + x[[rows, cols + 1]]);
}
