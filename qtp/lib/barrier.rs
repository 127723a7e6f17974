//! Smooth barrier representation over discrete samples.

use ndarray as nd;

use crate::{
    Arr1,
    error::BarrierError,
    interp::{CubicSpline, OutOfDomain},
};

pub type BarrierResult<T> = Result<T, BarrierError>;

/// A one-dimensional potential energy barrier built from discrete
/// `(position, energy)` samples.
///
/// The samples are interpolated by a cubic spline that is valid only on the
/// sampled domain; the barrier is taken to vanish identically outside it, a
/// boundary condition reflecting that the potential approaches its zero
/// baseline far from the reaction center. Positions must be strictly
/// increasing (callers sort or de-duplicate beforehand) and energies are
/// referenced to that zero baseline.
///
/// Immutable once built; any number of downstream objects may share one
/// profile read-only.
#[derive(Clone, Debug)]
pub struct BarrierProfile {
    z: nd::Array1<f64>,
    u: nd::Array1<f64>,
    spline: CubicSpline,
}

impl BarrierProfile {
    /// Construct from samples; at least 3 are required.
    pub fn new<S, T>(z: &Arr1<S>, u: &Arr1<T>) -> BarrierResult<Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        let spline = CubicSpline::new(z, u, OutOfDomain::Zero)?;
        Ok(Self { z: z.to_owned(), u: u.to_owned(), spline })
    }

    /// Sampled positions.
    pub fn get_z(&self) -> &nd::Array1<f64> { &self.z }

    /// Sampled energies.
    pub fn get_u(&self) -> &nd::Array1<f64> { &self.u }

    /// Barrier energy at `z`; exactly zero outside the sampled domain.
    pub fn evaluate(&self, z: f64) -> f64 {
        self.spline.evaluate(z)
    }

    /// `order`-th spatial derivative of the barrier at `z`; exactly zero
    /// outside the sampled domain for every order.
    pub fn derivative(&self, z: f64, order: usize) -> f64 {
        self.spline.derivative(z, order)
    }

    /// Every position in the sampled domain where the barrier equals
    /// `energy`, ascending.
    ///
    /// `energy` must be non-negative (the baseline outside the barrier is
    /// zero, so negative levels are never attained in a meaningful way). An
    /// empty result means the barrier never reaches `energy`; that is a
    /// valid outcome for the caller to interpret, not an error.
    pub fn coordinates_at_energy(&self, energy: f64) -> BarrierResult<Vec<f64>> {
        BarrierError::check_energy(energy)?;
        Ok(self.spline.solve(energy)?)
    }

    /// Height of the barrier: the largest energy attained at a stationary
    /// point of the interpolant.
    ///
    /// Stationary points are roots of the fitted polynomial pieces'
    /// derivatives. Without any (flat or monotonic samples) there is no
    /// finite maximum to report and the result is
    /// [`DegenerateBarrier`][BarrierError::DegenerateBarrier].
    pub fn max_energy(&self) -> BarrierResult<f64> {
        let crit = self.spline.stationary_points()?;
        crit.iter()
            .map(|zk| self.spline.evaluate(*zk))
            .max_by(|ua, ub| ua.partial_cmp(ub).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or(BarrierError::DegenerateBarrier)
    }
}

#[cfg(test)]
mod tests {
    use ndarray as nd;
    use crate::error::InterpError;
    use super::*;

    fn hump() -> BarrierProfile {
        let z: nd::Array1<f64> = nd::array![-5.0, -2.5, 0.0, 2.5, 5.0];
        let u: nd::Array1<f64> = nd::array![0.0, 0.03, 0.05, 0.03, 0.0];
        BarrierProfile::new(&z, &u).unwrap()
    }

    #[test]
    fn samples_are_reproduced() {
        let profile = hump();
        for (zk, uk) in profile.get_z().iter().zip(profile.get_u().iter()) {
            let v = profile.evaluate(*zk);
            assert!(
                (v - uk).abs() < 1e-12,
                "barrier misses its own sample at z = {zk}: {v} != {uk}",
            );
        }
    }

    #[test]
    fn vanishes_outside_the_samples() {
        let profile = hump();
        for z in [-5.000001, -20.0, 5.000001, 100.0] {
            assert_eq!(profile.evaluate(z), 0.0, "value at z = {z}");
            for order in 1..=4 {
                assert_eq!(
                    profile.derivative(z, order), 0.0,
                    "order-{order} derivative at z = {z}",
                );
            }
        }
    }

    #[test]
    fn gaussian_hump_maximum() {
        let z: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 21);
        let u: nd::Array1<f64> = z.mapv(|zk| 0.04 * (-zk * zk / 4.5).exp());
        let profile = BarrierProfile::new(&z, &u).unwrap();
        let umax = profile.max_energy().unwrap();
        assert!(
            (umax - 0.04).abs() < 1e-9,
            "hump maximum should sit at the center sample; got {umax}",
        );
    }

    #[test]
    fn turning_points_are_symmetric() {
        let profile = hump();
        let roots = profile.coordinates_at_energy(0.03).unwrap();
        assert_eq!(roots.len(), 2, "expected two crossings; got {roots:?}");
        assert!(
            (roots[0] + 2.5).abs() < 1e-7 && (roots[1] - 2.5).abs() < 1e-7,
            "crossings at {roots:?}",
        );
    }

    #[test]
    fn no_coordinates_above_the_maximum() {
        let profile = hump();
        let roots = profile.coordinates_at_energy(0.06).unwrap();
        assert!(roots.is_empty(), "no crossing exists above the top; got {roots:?}");
    }

    #[test]
    fn negative_energy_is_rejected() {
        let profile = hump();
        assert!(matches!(
            profile.coordinates_at_energy(-0.01),
            Err(BarrierError::InvalidEnergy(_)),
        ));
    }

    #[test]
    fn degenerate_barriers_have_no_maximum() {
        let z: nd::Array1<f64> = nd::array![0.0, 1.0, 2.0, 3.0, 4.0];
        let ramp: nd::Array1<f64> = z.mapv(|zk| 0.01 * zk);
        let profile = BarrierProfile::new(&z, &ramp).unwrap();
        assert!(matches!(
            profile.max_energy(),
            Err(BarrierError::DegenerateBarrier),
        ));
        let flat: nd::Array1<f64> = nd::Array1::from_elem(5, 0.02);
        let profile = BarrierProfile::new(&z, &flat).unwrap();
        assert!(matches!(
            profile.max_energy(),
            Err(BarrierError::DegenerateBarrier),
        ));
    }

    #[test]
    fn construction_requires_ordered_samples() {
        let z: nd::Array1<f64> = nd::array![0.0, 2.0, 1.0];
        let u: nd::Array1<f64> = nd::array![0.0, 0.01, 0.02];
        assert!(matches!(
            BarrierProfile::new(&z, &u),
            Err(BarrierError::Interp(InterpError::NonIncreasing { .. })),
        ));
    }
}
