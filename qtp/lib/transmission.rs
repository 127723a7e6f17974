//! WKB transmission coefficient through a sampled barrier.

use crate::{
    DEF_EPSABS, DEF_EPSREL, DEF_LIMIT,
    barrier::BarrierProfile,
    error::TransportError,
    quad,
};

pub type TransportResult<T> = Result<T, TransportError>;

/// Semiclassical transmission probability through a [`BarrierProfile`] for a
/// particle of fixed mass, tracked as ln T(E).
///
/// The barrier maximum is located once at construction (its own root-finding
/// pass over the interpolant) and cached for every subsequent energy query.
#[derive(Copy, Clone, Debug)]
pub struct TransmissionCoefficient<'a> {
    profile: &'a BarrierProfile,
    mass: f64,
    umax: f64,
}

impl<'a> TransmissionCoefficient<'a> {
    /// Construct for a particle of `mass`, in the mass unit conjugate to the
    /// barrier's energy and length units. The mass must be positive and the
    /// barrier must have a well-defined maximum.
    pub fn new(profile: &'a BarrierProfile, mass: f64) -> TransportResult<Self> {
        TransportError::check_mass(mass)?;
        let umax = profile.max_energy()?;
        Ok(Self { profile, mass, umax })
    }

    /// Particle mass.
    pub fn get_mass(&self) -> f64 { self.mass }

    /// Cached barrier maximum.
    pub fn get_umax(&self) -> f64 { self.umax }

    /// The barrier this transmission is computed through.
    pub fn get_profile(&self) -> &BarrierProfile { self.profile }

    /// ln T at incident energy `energy`.
    ///
    /// Energies at or above the barrier maximum are not classically
    /// forbidden; they return exactly 0 without touching the integrator.
    /// The comparison allows one part in 10^12, absorbing roundoff in the
    /// reconstructed maximum when `energy` is itself a sampled barrier
    /// value. Below the maximum, the forbidden region spans the outermost
    /// pair of classical turning points `z1 <= z2` and
    ///
    /// ```text
    /// ln T(E) = -2 sqrt(2 m) I ,    I = INT_z1^z2 sqrt(U(z) - E) dz
    /// ```
    ///
    /// with the integrand clamped at zero where interpolation overshoot
    /// drops `U` fractionally below `E`. A single turning point collapses
    /// the span and transmits fully. No turning point at all below the
    /// maximum means `energy` undercuts the barrier everywhere, which has
    /// no physical forbidden region to integrate over; that fails with
    /// [`AmbiguousTurningPoint`][TransportError::AmbiguousTurningPoint].
    pub fn evaluate(&self, energy: f64) -> TransportResult<f64> {
        if energy >= self.umax - 1e-12 * self.umax.abs() {
            return Ok(0.0);
        }
        let roots = self.profile.coordinates_at_energy(energy)?;
        let (z1, z2) = match (roots.first(), roots.last()) {
            (Some(z1), Some(z2)) => (*z1, *z2),
            _ => return Err(TransportError::AmbiguousTurningPoint(energy)),
        };
        let q = quad::adaptive(
            |z| Ok((self.profile.evaluate(z) - energy).max(0.0).sqrt()),
            z1, z2,
            DEF_EPSABS, DEF_EPSREL, DEF_LIMIT,
        )?;
        Ok(-2.0 * (2.0 * self.mass).sqrt() * q.value)
    }
}

#[cfg(test)]
mod tests {
    use ndarray as nd;
    use super::*;

    fn hump() -> BarrierProfile {
        let z: nd::Array1<f64> = nd::array![-5.0, -2.5, 0.0, 2.5, 5.0];
        let u: nd::Array1<f64> = nd::array![0.0, 0.03, 0.05, 0.03, 0.0];
        BarrierProfile::new(&z, &u).unwrap()
    }

    #[test]
    fn full_transmission_at_and_above_the_top() {
        let profile = hump();
        let transco = TransmissionCoefficient::new(&profile, 1.0).unwrap();
        assert_eq!(transco.evaluate(0.05).unwrap(), 0.0);
        assert_eq!(transco.evaluate(0.06).unwrap(), 0.0);
        assert_eq!(transco.evaluate(transco.get_umax()).unwrap(), 0.0);
    }

    #[test]
    fn ground_level_transmission_is_strongly_suppressed() {
        let profile = hump();
        let transco = TransmissionCoefficient::new(&profile, 1.0).unwrap();
        let lnt = transco.evaluate(0.0).unwrap();
        assert!(
            (-6.0..-3.0).contains(&lnt),
            "whole-barrier tunneling exponent out of range: {lnt}",
        );
    }

    #[test]
    fn transmission_increases_with_energy() {
        let profile = hump();
        let transco = TransmissionCoefficient::new(&profile, 1.0).unwrap();
        let mut prev = f64::NEG_INFINITY;
        for k in 0..10 {
            let energy = 0.005 * f64::from(k);
            let lnt = transco.evaluate(energy).unwrap();
            assert!(
                lnt >= prev,
                "ln T must not decrease with energy; \
                ln T({energy}) = {lnt} < {prev}",
            );
            prev = lnt;
        }
    }

    #[test]
    fn heavier_particles_tunnel_less() {
        let profile = hump();
        let light = TransmissionCoefficient::new(&profile, 1.0).unwrap();
        let heavy = TransmissionCoefficient::new(&profile, 1836.0).unwrap();
        let lnt_light = light.evaluate(0.01).unwrap();
        let lnt_heavy = heavy.evaluate(0.01).unwrap();
        assert!(
            lnt_heavy < lnt_light,
            "mass scaling inverted: {lnt_heavy} >= {lnt_light}",
        );
    }

    #[test]
    fn non_positive_masses_are_rejected() {
        let profile = hump();
        assert!(matches!(
            TransmissionCoefficient::new(&profile, 0.0),
            Err(TransportError::NonPositiveMass(_)),
        ));
        assert!(matches!(
            TransmissionCoefficient::new(&profile, -1.0),
            Err(TransportError::NonPositiveMass(_)),
        ));
    }

    #[test]
    fn energy_below_the_whole_barrier_is_ambiguous() {
        let z: nd::Array1<f64> = nd::array![-5.0, -2.5, 0.0, 2.5, 5.0];
        let u: nd::Array1<f64> = nd::array![0.02, 0.03, 0.05, 0.03, 0.02];
        let raised = BarrierProfile::new(&z, &u).unwrap();
        let transco = TransmissionCoefficient::new(&raised, 1.0).unwrap();
        assert!(matches!(
            transco.evaluate(0.005),
            Err(TransportError::AmbiguousTurningPoint(_)),
        ));
    }
}
