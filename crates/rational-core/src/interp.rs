//! Piecewise-linear interpolation with flat extrapolation.
//!
//! Below the first abscissa the first ordinate is returned, above the last
//! abscissa the last ordinate. Inside, the bracketing segment is located by
//! binary search.

/// Interpolate `ys` over `xs` at `x`.
///
/// `xs` must be non-decreasing and the same length as `ys`. Where `xs`
/// contains a repeated abscissa (a vertical step), queries exactly at that
/// abscissa resolve to the later segment.
pub fn linear_flat(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    if n == 0 {
        return f64::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First index with xs[i] > x; xs[0] <= x < xs[n-1] keeps it in 1..n.
    let hi = xs.partition_point(|&xi| xi <= x);
    let lo = hi - 1;
    let (x0, x1) = (xs[lo], xs[hi]);
    let (y0, y1) = (ys[lo], ys[hi]);

    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}
