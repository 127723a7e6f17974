//! Boltzmann-weighted particle flux across a barrier.

use std::f64::consts::PI;

use log::debug;

use crate::{
    DEF_EPSABS, DEF_EPSREL, DEF_LIMIT,
    error::TransportError,
    quad,
    transmission::{TransmissionCoefficient, TransportResult},
};

/// Classical and quantum flux components at one inverse temperature.
///
/// The two channels are reported separately so callers can attribute rate
/// contributions; [`total`][Self::total] sums them on demand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FluxComponents {
    /// Over-barrier (classical) flux.
    pub classical: f64,
    /// Through-barrier (tunneling) flux.
    pub quantum: f64,
}

impl FluxComponents {
    /// Sum of both channels.
    pub fn total(&self) -> f64 { self.classical + self.quantum }
}

/// Reactive particle flux derived from a [`TransmissionCoefficient`].
///
/// The particle mass and the barrier maximum are copied out of the
/// transmission object at construction; per-temperature queries never walk
/// back down the dependency chain for them.
#[derive(Copy, Clone, Debug)]
pub struct ParticleFlux<'a> {
    transco: &'a TransmissionCoefficient<'a>,
    mass: f64,
    umax: f64,
}

impl<'a> ParticleFlux<'a> {
    /// Construct from a transmission coefficient.
    pub fn new(transco: &'a TransmissionCoefficient<'a>) -> Self {
        Self {
            transco,
            mass: transco.get_mass(),
            umax: transco.get_umax(),
        }
    }

    /// Cached barrier maximum.
    pub fn get_umax(&self) -> f64 { self.umax }

    /// Flux components at inverse temperature `beta`, which must be positive
    /// and in the unit conjugate to the barrier's energy unit.
    ///
    /// ```text
    /// j_cl = exp(-beta Umax) / sqrt(2 pi m beta)
    /// j_qm = sqrt(beta / 2 pi m) INT_0^Umax exp(ln T(E) - beta E) dE
    /// ```
    ///
    /// The quantum integrand is evaluated adaptively: it peaks near E = 0
    /// when tunneling dominates and near the barrier top at high
    /// temperature, and neither regime is smooth enough for a fixed grid.
    pub fn evaluate(&self, beta: f64) -> TransportResult<FluxComponents> {
        TransportError::check_beta(beta)?;
        let q = quad::adaptive(
            |energy| Ok((self.transco.evaluate(energy)? - beta * energy).exp()),
            0.0, self.umax,
            DEF_EPSABS, DEF_EPSREL, DEF_LIMIT,
        )?;
        debug!(
            "tunneling integral at beta = {beta:.6e}: {:.6e} ({} subintervals)",
            q.value, q.intervals,
        );
        let quantum = (beta / (2.0 * PI * self.mass)).sqrt() * q.value;
        let classical = (-beta * self.umax).exp() / (2.0 * PI * self.mass * beta).sqrt();
        Ok(FluxComponents { classical, quantum })
    }
}

#[cfg(test)]
mod tests {
    use ndarray as nd;
    use crate::barrier::BarrierProfile;
    use super::*;

    fn hump() -> BarrierProfile {
        let z: nd::Array1<f64> = nd::array![-5.0, -2.5, 0.0, 2.5, 5.0];
        let u: nd::Array1<f64> = nd::array![0.0, 0.03, 0.05, 0.03, 0.0];
        BarrierProfile::new(&z, &u).unwrap()
    }

    #[test]
    fn classical_flux_matches_the_closed_form() {
        let profile = hump();
        let mass = 1.0;
        let transco = TransmissionCoefficient::new(&profile, mass).unwrap();
        let flux = ParticleFlux::new(&transco);
        for beta in [10.0, 100.0, 1000.0] {
            let f = flux.evaluate(beta).unwrap();
            let expected = (-beta * flux.get_umax()).exp()
                / (2.0 * PI * mass * beta).sqrt();
            assert!(
                (f.classical - expected).abs() <= 1e-15 * expected,
                "classical flux at beta = {beta}: {} != {expected}",
                f.classical,
            );
        }
    }

    #[test]
    fn tunneling_dominates_at_low_temperature() {
        let profile = hump();
        let transco = TransmissionCoefficient::new(&profile, 1.0).unwrap();
        let flux = ParticleFlux::new(&transco);
        let f = flux.evaluate(1052.0).unwrap();
        assert!(f.quantum > 0.0, "tunneling flux must be positive; got {}", f.quantum);
        assert!(
            f.quantum > f.classical,
            "deep tunneling regime inverted: {} <= {}",
            f.quantum, f.classical,
        );
        assert!((f.total() - (f.classical + f.quantum)).abs() == 0.0);
    }

    #[test]
    fn flux_components_are_finite_at_high_temperature() {
        let profile = hump();
        let transco = TransmissionCoefficient::new(&profile, 1.0).unwrap();
        let flux = ParticleFlux::new(&transco);
        let f = flux.evaluate(10.0).unwrap();
        assert!(f.classical.is_finite() && f.classical > 0.0);
        assert!(f.quantum.is_finite() && f.quantum > 0.0);
    }

    #[test]
    fn non_positive_inverse_temperatures_are_rejected() {
        let profile = hump();
        let transco = TransmissionCoefficient::new(&profile, 1.0).unwrap();
        let flux = ParticleFlux::new(&transco);
        assert!(matches!(
            flux.evaluate(0.0),
            Err(TransportError::InvalidTemperature(_)),
        ));
        assert!(matches!(
            flux.evaluate(-2.0),
            Err(TransportError::InvalidTemperature(_)),
        ));
    }
}
