//! Solver stages for a 2D collocated grid with a one-cell ghost border.
//!
//! Every stage writes into its first `&mut` argument and only reads the
//! others. Arrays are indexed `[[row, col]]`; see [`Grid`].

mod boundary;
mod grid;
mod linear;

pub use boundary::{set_boundary, Boundary};
pub use grid::Grid;
pub use linear::lin_solve;

use cgmath::{vec2, Vector2};
use ndarray::{Array2, Zip};

fn interpolate_linear(q: &Array2<f64>, xy: Vector2<f64>) -> f64 {
    let (h, w) = q.dim();

    assert!(w >= 1);
    assert!(h >= 1);

    let x = xy.x.max(0.0).min((w - 1) as f64);
    let y = xy.y.max(0.0).min((h - 1) as f64);

    let i0 = x as usize;
    let i1 = (i0 + 1).min(w - 1);

    let j0 = y as usize;
    let j1 = (j0 + 1).min(h - 1);

    let s1 = x - i0 as f64;
    let s0 = 1.0 - s1;

    let t1 = y - j0 as f64;
    let t0 = 1.0 - t1;

    s0 * (t0 * q[[j0, i0]] + t1 * q[[j1, i0]]) + s1 * (t0 * q[[j0, i1]] + t1 * q[[j1, i1]])
}

/// Implicitly diffuse `x0` into `x` at `rate` for one `dt`.
pub fn diffuse(
    b: Boundary,
    x: &mut Array2<f64>,
    x0: &Array2<f64>,
    rate: f64,
    dt: f64,
    iter: usize,
) {
    let (h, w) = x.dim();
    let cols = (w as f64 - 4.0).max(0.0);
    let rows = (h as f64 - 4.0).max(0.0);

    let a = dt * rate * cols * rows;
    lin_solve(b, x, x0, a, 1.0 + 4.0 * a, iter);
}

/// Central-difference divergence of `(u, v)` scaled by `-0.5`, written to the
/// interior of `div`.
pub fn divergence(div: &mut Array2<f64>, u: &Array2<f64>, v: &Array2<f64>) {
    let (h, w) = div.dim();

    for j in 1..h.saturating_sub(1) {
        for i in 1..w.saturating_sub(1) {
            div[[j, i]] = -0.5 * (u[[j, i + 1]] - u[[j, i - 1]] + v[[j + 1, i]] - v[[j - 1, i]]);
        }
    }
}

/// Mean absolute divergence of `(u, v)` over the interior cells.
pub fn mean_abs_divergence(u: &Array2<f64>, v: &Array2<f64>) -> f64 {
    let (h, w) = u.dim();
    if h < 3 || w < 3 {
        return 0.0;
    }

    let mut div = Array2::zeros(u.dim());
    divergence(&mut div, u, v);

    let n = ((h - 2) * (w - 2)) as f64;
    div.slice(ndarray::s![1..h - 1, 1..w - 1])
        .iter()
        .map(|d| d.abs())
        .sum::<f64>()
        / n
}

/// Remove the divergent part of `(u, v)`. `p` and `div` are scratch.
pub fn project(
    u: &mut Array2<f64>,
    v: &mut Array2<f64>,
    p: &mut Array2<f64>,
    div: &mut Array2<f64>,
    iter: usize,
) {
    assert_eq!(u.dim(), v.dim());
    assert_eq!(u.dim(), p.dim());
    assert_eq!(u.dim(), div.dim());

    let (h, w) = u.dim();
    if h < 3 || w < 3 {
        return;
    }

    divergence(div, u, v);
    p.fill(0.0);

    set_boundary(Boundary::Scalar, div);
    set_boundary(Boundary::Scalar, p);

    // Pure Poisson solve, no decay term
    lin_solve(Boundary::Scalar, p, div, 1.0, 4.0, iter);

    for j in 1..h - 1 {
        for i in 1..w - 1 {
            u[[j, i]] -= 0.5 * (p[[j, i + 1]] - p[[j, i - 1]]);
            v[[j, i]] -= 0.5 * (p[[j + 1, i]] - p[[j - 1, i]]);
        }
    }

    set_boundary(Boundary::Horizontal, u);
    set_boundary(Boundary::Vertical, v);
}

/// Semi-Lagrangian advection of `d0` along `(u, v)` into `d`.
///
/// Each interior cell traces back `dt * max(cols, rows)` cells along its own
/// velocity and bilinearly samples `d0` there.
pub fn advect(
    b: Boundary,
    d: &mut Array2<f64>,
    d0: &Array2<f64>,
    u: &Array2<f64>,
    v: &Array2<f64>,
    dt: f64,
) {
    assert_eq!(d.dim(), d0.dim());
    assert_eq!(d.dim(), u.dim());
    assert_eq!(d.dim(), v.dim());

    let (h, w) = d.dim();
    if h < 3 || w < 3 {
        return;
    }

    let (rows, cols) = ((h - 2) as f64, (w - 2) as f64);
    let dt0 = dt * cols.max(rows);

    Zip::indexed(&mut *d).and(u).and(v).for_each(|(j, i), e, &u, &v| {
        if j == 0 || i == 0 || j == h - 1 || i == w - 1 {
            return;
        }

        let back = vec2(i as f64, j as f64) - dt0 * vec2(u, v);
        let back = vec2(back.x.clamp(0.5, cols + 0.5), back.y.clamp(0.5, rows + 0.5));

        *e = interpolate_linear(d0, back);
    });

    set_boundary(b, d);
}
