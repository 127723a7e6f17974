//! Provides functions and higher-level constructs for computing quantum
//! tunneling transport properties of a one-dimensional potential barrier
//! sampled on a grid, working in atomic units throughout.
//!
//! Provides implementations for the following numerical routines:
//! - Cubic-spline barrier reconstruction with analytic derivatives, level
//!   crossings, and stationary points
//! - Semiclassical (WKB) transmission coefficients[^1]
//! - Thermally-averaged particle flux through the barrier, split into
//!   classical and tunneling channels
//! - Locally-resolved Arrhenius activation energies and pre-exponential
//!   factors from a rate-vs-temperature curve
//!
//! See [`docs`] for theoretical background.
//!
//! [^1]: R. P. Bell, "The Tunnel Effect in Chemistry" (Chapman and Hall,
//! 1980).

pub mod error;
pub mod interp;
pub mod units;
pub mod quad;
pub mod barrier;
pub mod transmission;
pub mod flux;
pub mod arrhenius;

pub mod docs;

pub(crate) const DEF_EPSABS: f64 = 1.49e-8;
pub(crate) const DEF_EPSREL: f64 = 1.49e-8;
pub(crate) const DEF_LIMIT: usize = 100;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
