use std::f64::consts::PI;
use ndarray as nd;
use qtp::{ barrier, transmission };

// compare the numerical WKB exponent against the closed form for an Eckart
// barrier, U(z) = U0 sech²(z/a), for which
//
//     ln T(E) = -2 √(2 m) π a (√U0 - √E)

fn main() {
    const MASS: f64 = 1836.152673; // proton; electron masses
    const U0: f64 = 0.01; // barrier height; hartree
    const A: f64 = 1.0; // barrier width; bohr

    let z: nd::Array1<f64> = nd::Array1::linspace(-8.0, 8.0, 161);
    let u: nd::Array1<f64> = z.mapv(|zk| U0 / (zk / A).cosh().powi(2));
    let profile = barrier::BarrierProfile::new(&z, &u).unwrap();
    let transco
        = transmission::TransmissionCoefficient::new(&profile, MASS).unwrap();

    let analytic
        = |e: f64| {
            -2.0 * (2.0 * MASS).sqrt() * PI * A * (U0.sqrt() - e.sqrt())
        };

    println!(
        "{:>12}  {:>14}  {:>14}  {:>10}",
        "E / hartree", "ln T (num)", "ln T (exact)", "rel. err",
    );
    for k in 1..10 {
        let e = k as f64 * U0 / 10.0;
        let numeric = transco.evaluate(e).unwrap();
        let exact = analytic(e);
        println!(
            "{:>12.4e}  {:>14.6}  {:>14.6}  {:>10.2e}",
            e, numeric, exact, (numeric - exact).abs() / exact.abs(),
        );
    }
}
