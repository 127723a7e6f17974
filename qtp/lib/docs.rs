//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Thermal flux](#thermal-flux)
//! - [Arrhenius analysis](#arrhenius-analysis)
//!
//! # Background
//! A particle of mass *m* and energy *E* incident on a one-dimensional
//! potential barrier *U*(*z*) has a finite probability of emerging on the far
//! side even when *E* lies below the barrier top. In the semiclassical (WKB)
//! approximation[^1], the transmission coefficient is controlled by the decay
//! of the wavefunction across the classically forbidden region,
//! ```text
//!                      z₂
//! ln T(E) = -2 √(2 m) ∫  √(U(z) - E) dz
//!                      z₁
//! ```
//! where *z*₁ and *z*₂ are the classical turning points, i.e. the outermost
//! solutions of *U*(*z*) = *E*. The integrand is the magnitude of the local
//! (imaginary) momentum in the forbidden region; between the turning points
//! the wavefunction decays like exp(-∫ |p| d*z*), and the transmission
//! probability is the square of the amplitude ratio across the barrier. For
//! *E* ≥ max *U* there is no forbidden region and the approximation reduces
//! to perfect transmission, ln *T* = 0. (The WKB form neglects the
//! above-barrier reflection a full wave treatment would produce[^2], but for
//! thermal rate problems the below-barrier regime dominates.)
//!
//! The barrier itself is reconstructed from sampled points by a cubic spline
//! with the not-a-knot end conditions, which makes *U*(*z*) piecewise
//! polynomial. Turning points are then roots of cubics and can be found
//! exactly (to machine precision) from the spline coefficients rather than by
//! bisection on the interpolant; the same applies to the stationary points
//! that locate the barrier top.
//!
//! # Units
//! All quantities in this crate are expressed in Hartree atomic units,
//! ```text
//! ħ = mₑ = e = 4 π ε₀ = 1
//! ```
//! so lengths are in bohr, energies in hartree, and masses in electron
//! masses. Temperature enters only through the inverse thermal energy
//! ```text
//!        1
//! β = ------
//!      k_B T
//! ```
//! which in atomic units is 1 / (*T* [K] · `kelvin2hartree`). Items in
//! [`units`][crate::units] are provided to handle conversion from the
//! laboratory units (dalton, kelvin, angstrom) in which problems are usually
//! stated.
//!
//! # Thermal flux
//! For a thermal ensemble at inverse temperature *β*, the one-dimensional
//! Maxwell-Boltzmann distribution of velocities toward the barrier is
//! ```text
//!          m β        m β v²
//! f(v) = √(---) exp(- ------)
//!          2 π           2
//! ```
//! and the transmitted flux is the velocity-weighted average of the
//! transmission coefficient, *j* = ∫ *v* *f*(*v*) *T*(*E*) d*v*. Changing
//! variables to the incident energy *E* = *m* *v*² / 2 splits the flux at the
//! barrier top into a tunneling (quantum) channel and an over-barrier
//! (classical) channel:
//! ```text
//!           β    Umax
//! j_q = √(-----) ∫    exp(ln T(E) - β E) dE
//!         2 π m   0
//!
//!           β     ∞                     exp(-β Umax)
//! j_c = √(-----) ∫    exp(-β E) dE  =  --------------
//!         2 π m   Umax                  √(2 π m β)
//! ```
//! where transmission above the top is taken as perfect. The total flux is
//! the sum of the two channels. A convenient dimensionless rate constant is
//! obtained by removing the thermal velocity prefactor,
//! ```text
//! k = j √(2 π m β)
//! ```
//! for which the classical channel reduces to exactly exp(-*β* *U*max), the
//! textbook activated-rate form.
//!
//! # Arrhenius analysis
//! A rate constant obeying the Arrhenius law satisfies
//! ```text
//! ln k = ln A - β E_act
//! ```
//! with constant *E*<sub>act</sub> and *A*. Tunneling rates deviate from this
//! law at low temperature (large *β*), which is quantified by promoting both
//! parameters to local functions of *β*:
//! ```text
//!            ∂ ln k
//! E_act = - --------        A = k exp(β E_act)
//!              ∂β
//! ```
//! Given rates sampled at a set of inverse temperatures, ln *k*(*β*) is
//! interpolated by a cubic spline and differentiated analytically at each
//! sample. For the classical channel this recovers *E*<sub>act</sub> =
//! *U*max and *A* = 1 identically; the depression of the total-rate
//! *E*<sub>act</sub> below *U*max measures the importance of tunneling at
//! that temperature.
//!
//! [^1]: R. P. Bell, "The Tunnel Effect in Chemistry" (Chapman and Hall,
//! 1980).
//!
//! [^2]: M. Razavy, "Quantum Theory of Tunneling" (World Scientific, 2003).
