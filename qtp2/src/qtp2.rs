use std::{ f64::consts::PI, io::{ self, Write }, path::PathBuf };
use anyhow::Context;
use clap::Parser;
use log::warn;
use ndarray as nd;
use rayon::prelude::*;
use qtp::{ arrhenius, barrier, flux, transmission, units };
use qtp2::{ input, report };

/// Tunneling transport properties of a one-dimensional barrier.
///
/// Reads barrier samples (z in bohr, U in hartrees) from DATAFILE and
/// prints transmission coefficients, thermal rate constants, and local
/// Arrhenius parameters over a range of temperatures.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Barrier datafile: whitespace-separated z U pairs.
    datafile: PathBuf,
    /// Particle mass in daltons.
    #[arg(short, long, default_value_t = 1.0)]
    mass: f64,
    /// First temperature in kelvin.
    #[arg(long, default_value_t = 300.0)]
    tstart: f64,
    /// Last temperature in kelvin, defaulting to TSTART.
    #[arg(long)]
    tfinal: Option<f64>,
    /// Temperature increment in kelvin.
    #[arg(long, default_value_t = 10.0)]
    tstep: f64,
    /// Energy shift in hartrees added to every barrier sample.
    #[arg(long, default_value_t = 0.0)]
    eshift: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(
        args.mass > 0.0, "mass must be positive, got {} Da", args.mass);
    let sweep
        = input::TemperatureSweep::new(args.tstart, args.tfinal, args.tstep)?;
    let temps: Vec<f64> = sweep.resolve();
    let (z, mut u) = input::read_barrier_file(&args.datafile)?;
    u += args.eshift;
    let mass = args.mass * units::dalton2me;

    let stdout = io::stdout();
    let mut w = stdout.lock();
    report::banner(&mut w)?;

    let profile = barrier::BarrierProfile::new(&z, &u)
        .context("failed to reconstruct the barrier")?;
    let transco = transmission::TransmissionCoefficient::new(&profile, mass)
        .context("failed to set up the transmission coefficient")?;

    let barrier_rows: Vec<report::BarrierRow>
        = z.iter().zip(u.iter())
        .map(|(zk, uk)| -> anyhow::Result<report::BarrierRow> {
            let ln_t = transco.evaluate(*uk)
                .with_context(|| {
                    format!("transmission failed at E = {uk:.6e} hartree")
                })?;
            Ok(report::BarrierRow {
                z_ang: *zk / units::angstrom2bohr,
                z: *zk,
                energy: *uk,
                ln_t,
            })
        })
        .collect::<anyhow::Result<_>>()?;
    report::barrier_table(&mut w, &barrier_rows)?;
    report::stamp(&mut w)?;

    let fluxco = flux::ParticleFlux::new(&transco);
    let flux_rows: Vec<report::FluxRow>
        = temps.par_iter()
        .map(|temp| -> anyhow::Result<report::FluxRow> {
            let beta = 1.0 / (*temp * units::kelvin2hartree);
            let f = fluxco.evaluate(beta)
                .with_context(|| {
                    format!("flux evaluation failed at T = {temp} K")
                })?;
            let kin = (2.0 * PI * mass * beta).sqrt();
            Ok(report::FluxRow {
                temp: *temp,
                beta,
                k_classic: kin * f.classical,
                k_tunnel: kin * f.quantum,
                flux_classic: f.classical,
                flux_tunnel: f.quantum,
            })
        })
        .collect::<anyhow::Result<_>>()?;
    report::flux_table(&mut w, &flux_rows)?;
    report::stamp(&mut w)?;

    if temps.len() >= 3 {
        let betas: nd::Array1<f64>
            = flux_rows.iter().map(|row| row.beta).collect();
        let ln_cl: nd::Array1<f64>
            = flux_rows.iter().map(|row| row.k_classic.ln()).collect();
        let ln_tun: nd::Array1<f64>
            = flux_rows.iter().map(|row| row.k_tunnel.ln()).collect();
        let ln_tot: nd::Array1<f64>
            = flux_rows.iter()
            .map(|row| (row.k_classic + row.k_tunnel).ln())
            .collect();
        let cl = arrhenius::fit(&betas, &ln_cl)
            .context("arrhenius fit failed for the classical channel")?;
        let tun = arrhenius::fit(&betas, &ln_tun)
            .context("arrhenius fit failed for the tunneling channel")?;
        let tot = arrhenius::fit(&betas, &ln_tot)
            .context("arrhenius fit failed for the total rate")?;
        let arrhenius_rows: Vec<report::ArrheniusRow>
            = flux_rows.iter().enumerate()
            .map(|(k, row)| report::ArrheniusRow {
                temp: row.temp,
                classic: (cl.activation_energy[k], cl.prefactor[k]),
                tunnel: (tun.activation_energy[k], tun.prefactor[k]),
                total: (tot.activation_energy[k], tot.prefactor[k]),
            })
            .collect();
        report::arrhenius_table(&mut w, &arrhenius_rows)?;
    } else {
        warn!(
            "skipping the Arrhenius table: need at least 3 temperatures, have {}",
            temps.len(),
        );
    }
    report::stamp(&mut w)?;
    w.flush()?;
    Ok(())
}
