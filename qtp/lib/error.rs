//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when a quadrature routine exhausts its subdivision budget before
/// meeting its error target.
///
/// Carries the best estimate reached and its error bound so the failure can
/// be inspected instead of silently truncated.
#[derive(Debug, Error)]
#[error(
    "adaptive quadrature failed to converge within {limit} subintervals; \
    best estimate {estimate:e} with error bound {error:e}"
)]
pub struct IntegrationFailure {
    /// Subdivision budget that was exhausted.
    pub limit: usize,
    /// Best integral estimate at the point of failure.
    pub estimate: f64,
    /// Absolute error bound on `estimate`.
    pub error: f64,
}

/// Returned from functions in [`interp`][crate::interp].
#[derive(Debug, Error)]
pub enum InterpError {
    /// Returned when fewer samples are supplied than the interpolant needs.
    #[error("cubic interpolation requires at least 3 sample points; got {0}")]
    TooFewSamples(usize),

    /// Returned when sample positions are not strictly increasing.
    #[error(
        "sample positions must be strictly increasing; \
        got {left} followed by {right} at index {index}"
    )]
    NonIncreasing {
        /// Index of the offending pair's left element.
        index: usize,
        /// Left element of the offending pair.
        left: f64,
        /// Right element of the offending pair.
        right: f64,
    },

    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`]
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

impl InterpError {
    pub(crate) fn check_samples<S>(x: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        let n = x.len();
        if n < 3 {
            return Err(Self::TooFewSamples(n));
        }
        for (index, pair) in x.windows(2).into_iter().enumerate() {
            if !(pair[0] < pair[1]) {
                return Err(Self::NonIncreasing {
                    index,
                    left: pair[0],
                    right: pair[1],
                });
            }
        }
        Ok(())
    }
}

/// Returned from [`BarrierProfile`][crate::barrier::BarrierProfile]
/// operations.
#[derive(Debug, Error)]
pub enum BarrierError {
    /// Returned when the barrier has no interior stationary point, as for
    /// flat or monotonic samples.
    #[error("barrier has no interior stationary point; cannot determine a finite maximum")]
    DegenerateBarrier,

    /// Returned when a negative energy is passed to the inverse coordinate
    /// lookup. Barrier energies are referenced to the zero level approached
    /// outside the sampled domain.
    #[error("lookup energies must be greater than or equal to 0; got {0}")]
    InvalidEnergy(f64),

    /// [`InterpError`]
    #[error("interpolation error: {0}")]
    Interp(#[from] InterpError),
}

impl BarrierError {
    pub(crate) fn check_energy(energy: f64) -> Result<(), Self> {
        (energy >= 0.0).then_some(()).ok_or(Self::InvalidEnergy(energy))
    }
}

/// Returned from transmission and flux computations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Returned when a non-positive particle mass is encountered.
    #[error("particle masses must be greater than 0; got {0}")]
    NonPositiveMass(f64),

    /// Returned when a non-positive inverse temperature is encountered.
    #[error("inverse temperatures must be greater than 0; got {0}")]
    InvalidTemperature(f64),

    /// Returned when a transmission energy lies below the barrier minimum
    /// everywhere, leaving no turning points to bound a forbidden region.
    #[error("energy {0} lies below the barrier everywhere; turning points are undefined")]
    AmbiguousTurningPoint(f64),

    /// [`BarrierError`]
    #[error("barrier error: {0}")]
    Barrier(#[from] BarrierError),

    /// [`IntegrationFailure`]
    #[error("integration error: {0}")]
    Integration(#[from] IntegrationFailure),
}

impl TransportError {
    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass > 0.0).then_some(()).ok_or(Self::NonPositiveMass(mass))
    }

    pub(crate) fn check_beta(beta: f64) -> Result<(), Self> {
        (beta > 0.0).then_some(()).ok_or(Self::InvalidTemperature(beta))
    }
}

/// Returned from the Arrhenius parameter fit.
#[derive(Debug, Error)]
pub enum ArrheniusError {
    /// Returned when fewer than 3 temperature points are supplied.
    #[error("local Arrhenius fits require at least 3 temperature points; got {0}")]
    InsufficientData(usize),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`InterpError`]
    #[error("interpolation error: {0}")]
    Interp(#[from] InterpError),
}

impl ArrheniusError {
    pub(crate) fn check_points<S, A>(a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let n = a.len();
        (n >= 3).then_some(()).ok_or(Self::InsufficientData(n))
    }
}
