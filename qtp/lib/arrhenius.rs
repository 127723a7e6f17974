//! Locally-resolved Arrhenius parameters from a rate-vs-temperature curve.

use log::warn;
use ndarray as nd;

use crate::{
    Arr1,
    error::{ArrheniusError, LengthError},
    interp::{CubicSpline, OutOfDomain},
};

pub type ArrheniusResult<T> = Result<T, ArrheniusError>;

/// Local Arrhenius parameters, one pair per sampled inverse temperature,
/// ordered like the `betas` passed to [`fit`].
#[derive(Clone, Debug, PartialEq)]
pub struct ArrheniusParams {
    /// Local activation energy at each sampled inverse temperature.
    pub activation_energy: nd::Array1<f64>,
    /// Local pre-exponential factor at each sampled inverse temperature.
    pub prefactor: nd::Array1<f64>,
}

/// Extract local Arrhenius parameters from sampled `(beta, ln k)` pairs.
///
/// The pairs are sorted by `beta` internally (so the caller may pass them in
/// any order) and interpolated by a cubic with no extrapolation; at least 3
/// pairs are required and duplicate betas are rejected. At each of the
/// caller's betas,
///
/// ```text
/// E_act(beta) = -d ln k / d beta
/// A(beta)     = k(beta) exp(beta E_act(beta))
/// ```
///
/// generalizing `ln k = ln A - beta E_act` to a locally-varying activation
/// energy. Outputs keep the caller's `betas` order. A beta outside the
/// sampled range (impossible when the fit is queried at its own samples)
/// produces NaN in both outputs; callers treat that as missing data.
pub fn fit<S, T>(betas: &Arr1<S>, ln_rates: &Arr1<T>)
    -> ArrheniusResult<ArrheniusParams>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(betas, ln_rates)?;
    ArrheniusError::check_points(betas)?;
    let mut order: Vec<usize> = (0..betas.len()).collect();
    order.sort_by(|i, j| {
        betas[*i].partial_cmp(&betas[*j]).unwrap_or(std::cmp::Ordering::Equal)
    });
    let sorted_b: nd::Array1<f64> = order.iter().map(|i| betas[*i]).collect();
    let sorted_k: nd::Array1<f64> = order.iter().map(|i| ln_rates[*i]).collect();
    let spline = CubicSpline::new(&sorted_b, &sorted_k, OutOfDomain::Nan)?;

    let mut activation_energy: nd::Array1<f64> = nd::Array1::zeros(betas.len());
    let mut prefactor: nd::Array1<f64> = nd::Array1::zeros(betas.len());
    for (k, beta) in betas.iter().enumerate() {
        let ea = -spline.derivative(*beta, 1);
        if !ea.is_finite() {
            warn!("arrhenius parameters at beta = {beta:.6e} fall outside the fitted range");
        }
        activation_energy[k] = ea;
        prefactor[k] = (spline.evaluate(*beta) + *beta * ea).exp();
    }
    Ok(ArrheniusParams { activation_energy, prefactor })
}
