//! Piecewise-cubic interpolation with polynomial-exact root extraction.
//!
//! The interpolant is a not-a-knot cubic spline. Level crossings and
//! stationary points are found per piece from the fitted polynomial
//! coefficients by companion-matrix eigenvalues, not by grid search, so
//! roots are resolved to the accuracy of the fit itself.

use ndarray as nd;
use ndarray_linalg::{Eig, Solve};
use num_complex::Complex64;
use num_traits::Num;

use crate::{
    Arr1,
    error::{InterpError, LengthError},
};

pub type InterpResult<T> = Result<T, InterpError>;

/// Behavior of a [`CubicSpline`] queried outside its knot domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutOfDomain {
    /// Values and derivatives of every order are zero outside the domain.
    Zero,
    /// Values and derivatives of every order are NaN outside the domain.
    Nan,
}

/// Evaluate a polynomial at `x` by Horner's scheme. Coefficients are given
/// highest order first.
pub fn horner<A>(coeffs: &[A], x: A) -> A
where A: Num + Copy
{
    coeffs.iter().fold(A::zero(), |acc, c| acc * x + *c)
}

/// Coefficients (highest order first) of the `order`-th derivative of the
/// polynomial with coefficients `coeffs`.
fn derivative_coeffs(coeffs: &[f64], order: usize) -> Vec<f64> {
    let mut c: Vec<f64> = coeffs.to_vec();
    for _ in 0..order {
        let deg = c.len() - 1;
        if deg == 0 {
            return vec![0.0];
        }
        c = c.iter().take(deg)
            .enumerate()
            .map(|(k, ck)| *ck * (deg - k) as f64)
            .collect();
    }
    c
}

/// Real roots of the polynomial with coefficients `coeffs` (highest order
/// first) lying in the closed interval `[0, h]`, ascending.
///
/// Roots are the real eigenvalues of the companion matrix built after
/// trimming negligible leading coefficients. `None` flags a polynomial that
/// is identically zero to within roundoff; such pieces have no isolated
/// roots and are the caller's business to skip.
fn real_roots_in(coeffs: &[f64], h: f64) -> InterpResult<Option<Vec<f64>>> {
    const IM_TOL: f64 = 1e-8;
    let scale: f64 = coeffs.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if scale == 0.0 {
        return Ok(None);
    }
    let mut c: &[f64] = coeffs;
    while c.len() > 1 && c[0].abs() < 1e-14 * scale {
        c = &c[1..];
    }
    let deg = c.len() - 1;
    if deg == 0 {
        return Ok(if c[0].abs() < 1e-14 * scale { None } else { Some(Vec::new()) });
    }
    let lead = c[0];
    let mut comp: nd::Array2<f64> = nd::Array2::zeros((deg, deg));
    for k in 1..deg {
        comp[[k, k - 1]] = 1.0;
    }
    for k in 0..deg {
        comp[[k, deg - 1]] = -c[deg - k] / lead;
    }
    let (eigvals, _): (nd::Array1<Complex64>, _) = comp.eig()?;
    let slack = 1e-9 * h;
    let mut roots: Vec<f64> = eigvals.iter()
        .filter(|ev| ev.im.abs() <= IM_TOL * (1.0 + ev.re.abs()))
        .map(|ev| ev.re)
        .filter(|u| (-slack..=h + slack).contains(u))
        .map(|u| u.clamp(0.0, h))
        .collect();
    roots.sort_by(|l, r| l.partial_cmp(r).unwrap_or(std::cmp::Ordering::Equal));
    Ok(Some(roots))
}

/// Not-a-knot cubic spline through `(x, y)` samples.
///
/// At least 3 samples are required and `x` must be strictly increasing;
/// exactly 3 samples produce the unique parabola through the points. Pieces
/// are stored as power-series coefficients in the local variable
/// `u = x - x[i]`, highest order first.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    x: Vec<f64>,
    coeffs: nd::Array2<f64>,
    out: OutOfDomain,
}

impl CubicSpline {
    /// Fit the interpolant.
    pub fn new<S, T>(x: &Arr1<S>, y: &Arr1<T>, out: OutOfDomain)
        -> InterpResult<Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        LengthError::check(x, y)?;
        InterpError::check_samples(x)?;
        let n = x.len();
        let dx: Vec<f64> = (0..n - 1).map(|i| x[i + 1] - x[i]).collect();
        let slope: Vec<f64> = (0..n - 1).map(|i| (y[i + 1] - y[i]) / dx[i]).collect();

        // knot derivatives s solve a tridiagonal-structured system; the two
        // boundary rows encode the not-a-knot condition
        let mut a: nd::Array2<f64> = nd::Array2::zeros((n, n));
        let mut b: nd::Array1<f64> = nd::Array1::zeros(n);
        if n == 3 {
            a[[0, 0]] = 1.0;
            a[[0, 1]] = 1.0;
            b[0] = 2.0 * slope[0];
            a[[1, 0]] = dx[1];
            a[[1, 1]] = 2.0 * (dx[0] + dx[1]);
            a[[1, 2]] = dx[0];
            b[1] = 3.0 * (dx[1] * slope[0] + dx[0] * slope[1]);
            a[[2, 1]] = 1.0;
            a[[2, 2]] = 1.0;
            b[2] = 2.0 * slope[1];
        } else {
            let dl = x[2] - x[0];
            a[[0, 0]] = dx[1];
            a[[0, 1]] = dl;
            b[0] = ((dx[0] + 2.0 * dl) * dx[1] * slope[0]
                + dx[0] * dx[0] * slope[1]) / dl;
            for i in 1..n - 1 {
                a[[i, i - 1]] = dx[i];
                a[[i, i]] = 2.0 * (dx[i - 1] + dx[i]);
                a[[i, i + 1]] = dx[i - 1];
                b[i] = 3.0 * (dx[i] * slope[i - 1] + dx[i - 1] * slope[i]);
            }
            let dr = x[n - 1] - x[n - 3];
            a[[n - 1, n - 2]] = dr;
            a[[n - 1, n - 1]] = dx[n - 3];
            b[n - 1] = (dx[n - 2] * dx[n - 2] * slope[n - 3]
                + (2.0 * dr + dx[n - 2]) * dx[n - 3] * slope[n - 2]) / dr;
        }
        let s: nd::Array1<f64> = a.solve_into(b)?;

        let mut coeffs: nd::Array2<f64> = nd::Array2::zeros((n - 1, 4));
        for i in 0..n - 1 {
            let t = (s[i] + s[i + 1] - 2.0 * slope[i]) / dx[i];
            coeffs[[i, 0]] = t / dx[i];
            coeffs[[i, 1]] = (slope[i] - s[i]) / dx[i] - t;
            coeffs[[i, 2]] = s[i];
            coeffs[[i, 3]] = y[i];
        }
        Ok(Self { x: x.to_vec(), coeffs, out })
    }

    /// Knot positions.
    pub fn get_x(&self) -> &[f64] { &self.x }

    /// First and last knot positions.
    pub fn domain(&self) -> (f64, f64) { (self.x[0], self.x[self.x.len() - 1]) }

    fn contains(&self, x: f64) -> bool {
        let (lo, hi) = self.domain();
        lo <= x && x <= hi
    }

    fn piece(&self, x: f64) -> usize {
        self.x.partition_point(|xk| *xk < x).clamp(1, self.x.len() - 1) - 1
    }

    fn piece_coeffs(&self, i: usize) -> [f64; 4] {
        [
            self.coeffs[[i, 0]],
            self.coeffs[[i, 1]],
            self.coeffs[[i, 2]],
            self.coeffs[[i, 3]],
        ]
    }

    /// Value of the interpolant at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.derivative(x, 0)
    }

    /// `order`-th derivative of the interpolant at `x`. Order 0 is the value
    /// itself; every order above 3 is identically zero inside the domain.
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        if !self.contains(x) {
            return match self.out {
                OutOfDomain::Zero => 0.0,
                OutOfDomain::Nan => f64::NAN,
            };
        }
        let i = self.piece(x);
        let u = x - self.x[i];
        let c = self.piece_coeffs(i);
        if order == 0 {
            horner(&c, u)
        } else {
            horner(&derivative_coeffs(&c, order), u)
        }
    }

    /// Every `x` in the knot domain where the interpolant equals `level`,
    /// ascending, de-duplicated at shared knots. Pieces sitting identically
    /// at `level` contribute no isolated crossings and are skipped.
    pub fn solve(&self, level: f64) -> InterpResult<Vec<f64>> {
        let mut found: Vec<f64> = Vec::new();
        for i in 0..self.x.len() - 1 {
            let h = self.x[i + 1] - self.x[i];
            let mut c = self.piece_coeffs(i);
            c[3] -= level;
            if let Some(roots) = real_roots_in(&c, h)? {
                found.extend(roots.into_iter().map(|u| self.x[i] + u));
            }
        }
        Ok(self.dedup(found))
    }

    /// Every `x` in the knot domain where the first derivative of the
    /// interpolant vanishes, ascending. Pieces with an identically-zero
    /// derivative are skipped.
    pub fn stationary_points(&self) -> InterpResult<Vec<f64>> {
        let mut found: Vec<f64> = Vec::new();
        for i in 0..self.x.len() - 1 {
            let h = self.x[i + 1] - self.x[i];
            let c = self.piece_coeffs(i);
            let dc = [3.0 * c[0], 2.0 * c[1], c[2]];
            if let Some(roots) = real_roots_in(&dc, h)? {
                found.extend(roots.into_iter().map(|u| self.x[i] + u));
            }
        }
        Ok(self.dedup(found))
    }

    fn dedup(&self, mut found: Vec<f64>) -> Vec<f64> {
        let (lo, hi) = self.domain();
        let tol = 1e-9 * (hi - lo);
        found.sort_by(|l, r| l.partial_cmp(r).unwrap_or(std::cmp::Ordering::Equal));
        found.dedup_by(|b, a| (*b - *a).abs() <= tol);
        found
    }
}
