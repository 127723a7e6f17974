#![allow(non_upper_case_globals)]

//! Physical constants and the conversion factors between laboratory units
//! (daltons, kelvins, angstroms) and the atomic units used throughout the
//! transport pipeline (electron masses, hartrees, Bohr radii).
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// Avogadro's number
pub const NA: f64 = 6.02214076e23;
//              +/- 0 (exact)

/// Boltzmann's constant (J K^-1)
pub const kB: f64 = 1.380649e-23;
//              +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// unified atomic mass unit (kg)
pub const mu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J) = 2\*Rinf\*h\*c
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// particle mass conversion, daltons to electron masses
pub const dalton2me: f64 = mu / me;

/// thermal energy conversion, kelvins to hartrees; the inverse temperature
/// conjugate to hartree energies is `1.0 / (T * kelvin2hartree)`
pub const kelvin2hartree: f64 = kB / Eh;

/// length conversion, angstroms to Bohr radii
pub const angstrom2bohr: f64 = 1e-10 / a0;
