//! Numerical helpers: epsilon comparison and Gaussian error propagation.

use ndarray::{Array, ArrayBase, Data, Dimension, Zip};

/// Whether every element of `arr` is within machine epsilon of `truth`.
/// Arrays of different shapes never compare equal.
pub fn equal_eps<S, T, D>(arr: &ArrayBase<S, D>, truth: &ArrayBase<T, D>) -> bool
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    arr.shape() == truth.shape()
        && Zip::from(arr).and(truth).all(|&a, &b| (a - b).abs() < f64::EPSILON)
}

/// Product `x * y` with its propagated uncertainty.
#[inline]
pub fn multerr(x: f64, sx: f64, y: f64, sy: f64) -> (f64, f64) {
    let err = ((sx * y).powi(2) + (sy * x).powi(2)).sqrt();
    (x * y, err)
}

/// Quotient `x / y` with its propagated uncertainty.
#[inline]
pub fn diverr(x: f64, sx: f64, y: f64, sy: f64) -> (f64, f64) {
    let err = ((sx / y).powi(2) + (-x * sy / y.powi(2)).powi(2)).sqrt();
    (x / y, err)
}

/// Elementwise [`multerr`].
///
/// # Panics
/// If the four arrays do not share one shape.
pub fn multerr_array<S, D>(
    x: &ArrayBase<S, D>, sx: &ArrayBase<S, D>,
    y: &ArrayBase<S, D>, sy: &ArrayBase<S, D>,
) -> (Array<f64, D>, Array<f64, D>)
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    propagate(x, sx, y, sy, multerr)
}

/// Elementwise [`diverr`].
///
/// # Panics
/// If the four arrays do not share one shape.
pub fn diverr_array<S, D>(
    x: &ArrayBase<S, D>, sx: &ArrayBase<S, D>,
    y: &ArrayBase<S, D>, sy: &ArrayBase<S, D>,
) -> (Array<f64, D>, Array<f64, D>)
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    propagate(x, sx, y, sy, diverr)
}

fn propagate<S, D>(
    x: &ArrayBase<S, D>, sx: &ArrayBase<S, D>,
    y: &ArrayBase<S, D>, sy: &ArrayBase<S, D>,
    op: fn(f64, f64, f64, f64) -> (f64, f64),
) -> (Array<f64, D>, Array<f64, D>)
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut value = Array::<f64, D>::zeros(x.raw_dim());
    let mut err = Array::<f64, D>::zeros(x.raw_dim());

    Zip::from(&mut value).and(&mut err)
        .and(x).and(sx).and(y).and(sy)
        .for_each(|v, e, &x, &sx, &y, &sy| (*v, *e) = op(x, sx, y, sy));

    (value, err)
}
