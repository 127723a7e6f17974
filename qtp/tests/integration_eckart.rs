//! Integration tests: WKB transmission against the Eckart barrier.
//!
//! The symmetric Eckart barrier U(z) = U0 sech^2(z / a) admits a closed-form
//! barrier integral,
//!
//! ```text
//! INT_z1^z2 sqrt(U(z) - E) dz = pi a (sqrt(U0) - sqrt(E)) ,
//! ```
//!
//! so the whole sampled-barrier chain (spline reconstruction, turning-point
//! search, adaptive quadrature) can be checked against an exact answer.

use std::f64::consts::PI;

use ndarray as nd;
use qtp::{
    barrier::BarrierProfile,
    transmission::TransmissionCoefficient,
    units,
};

const U0: f64 = 0.01; // hartree
const A: f64 = 1.0; // bohr

fn eckart() -> BarrierProfile {
    let z: nd::Array1<f64> = nd::Array1::linspace(-8.0, 8.0, 161);
    let u: nd::Array1<f64> = z.mapv(|zk| U0 / (zk / A).cosh().powi(2));
    BarrierProfile::new(&z, &u).unwrap()
}

#[test]
fn wkb_exponent_matches_the_eckart_closed_form() {
    let profile = eckart();
    let mass = units::mp / units::me;
    let transco = TransmissionCoefficient::new(&profile, mass).unwrap();
    for energy in [0.002, 0.005, 0.008] {
        let numeric = transco.evaluate(energy).unwrap();
        let exact
            = -2.0 * (2.0 * mass).sqrt() * PI * A * (U0.sqrt() - energy.sqrt());
        assert!(
            (numeric - exact).abs() < 1e-2 * exact.abs(),
            "ln T({energy}) = {numeric}, closed form gives {exact}",
        );
    }
}

#[test]
fn reconstructed_maximum_matches_the_peak() {
    let profile = eckart();
    let umax = profile.max_energy().unwrap();
    assert!(
        (umax - U0).abs() < 1e-9 * U0,
        "barrier maximum {umax} drifted from the sampled peak {U0}",
    );
}
