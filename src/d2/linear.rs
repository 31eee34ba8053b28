use super::boundary::{set_boundary, Boundary};
use ndarray::Array2;

/// Gauss-Seidel relaxation of `c * x - a * (sum of 4 neighbours of x) = x0`.
///
/// Runs exactly `iter` sweeps over the interior, updating `x` in place and
/// reading neighbours from the values already written this sweep. The
/// current contents of `x` are the initial guess. The border is refreshed
/// after every sweep.
pub fn lin_solve(
    b: Boundary,
    x: &mut Array2<f64>,
    x0: &Array2<f64>,
    a: f64,
    c: f64,
    iter: usize,
) {
    assert_eq!(x.dim(), x0.dim());

    let (h, w) = x.dim();
    if h < 3 || w < 3 {
        return;
    }

    let c_recip = 1.0 / c;

    for _ in 0..iter {
        for j in 1..h - 1 {
            for i in 1..w - 1 {
                let sum = x[[j, i + 1]] + x[[j, i - 1]] + x[[j + 1, i]] + x[[j - 1, i]];
                x[[j, i]] = (x0[[j, i]] + a * sum) * c_recip;
            }
        }
        set_boundary(b, x);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Array;

    #[test]
    fn test_zero_coupling_copies_source() {
        let x0 = Array::from_shape_fn((6, 7), |(j, i)| (i * j) as f64);
        let mut x = Array::from_elem((6, 7), 42.0);

        lin_solve(Boundary::Scalar, &mut x, &x0, 0.0, 1.0, 1);

        for j in 1..5 {
            for i in 1..6 {
                assert_abs_diff_eq!(x[[j, i]], x0[[j, i]]);
            }
        }
        assert_abs_diff_eq!(x[[0, 3]], x0[[1, 3]]);
    }

    #[test]
    fn test_reads_updated_neighbours() {
        // With a single sweep, the second cell must already see the first.
        let mut x0 = Array::zeros((3, 4));
        x0[[1, 1]] = 4.0;
        let mut x = Array::zeros((3, 4));

        lin_solve(Boundary::Scalar, &mut x, &x0, 1.0, 4.0, 1);

        assert_abs_diff_eq!(x[[1, 1]], 1.0);
        assert_abs_diff_eq!(x[[1, 2]], 0.25);
    }

    #[test]
    fn test_border_refreshed_between_sweeps() {
        // The wall cell's ghost must hold the first sweep's value when the
        // second sweep reads it.
        let mut x0 = Array::zeros((3, 4));
        x0[[1, 1]] = 4.0;
        let mut x = Array::zeros((3, 4));

        lin_solve(Boundary::Scalar, &mut x, &x0, 1.0, 4.0, 2);

        assert_abs_diff_eq!(x[[1, 1]], 1.8125);
        assert_abs_diff_eq!(x[[1, 2]], 0.640625);
        assert_abs_diff_eq!(x[[1, 0]], 1.8125);
    }

    #[test]
    fn test_uniform_field_is_fixed_point() {
        let a = 2.5;
        let x0 = Array::from_elem((8, 8), 1.0);
        let mut x = Array::from_elem((8, 8), 1.0);

        lin_solve(Boundary::Scalar, &mut x, &x0, a, 1.0 + 4.0 * a, 10);

        for e in x.iter() {
            assert_abs_diff_eq!(*e, 1.0, epsilon = 1e-12);
        }
    }
}
