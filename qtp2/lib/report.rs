//! Fixed-width report tables for the command-line driver.

use std::io::{ self, Write };
use chrono::Local;

/// One row of the transmission table, one barrier sample each.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BarrierRow {
    pub z_ang: f64,
    pub z: f64,
    pub energy: f64,
    pub ln_t: f64,
}

/// One row of the rate table, one temperature each.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FluxRow {
    pub temp: f64,
    pub beta: f64,
    pub k_classic: f64,
    pub k_tunnel: f64,
    pub flux_classic: f64,
    pub flux_tunnel: f64,
}

/// One row of the Arrhenius table; each channel carries
/// `(activation energy, prefactor)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrheniusRow {
    pub temp: f64,
    pub classic: (f64, f64),
    pub tunnel: (f64, f64),
    pub total: (f64, f64),
}

/// Print the program title, version, and a wall-clock stamp.
pub fn banner<W>(w: &mut W) -> io::Result<()>
where W: Write
{
    writeln!(
        w, "Quantum Transport Properties 2 (v. {})",
        env!("CARGO_PKG_VERSION"),
    )?;
    stamp(w)
}

/// Print a wall-clock stamp.
pub fn stamp<W>(w: &mut W) -> io::Result<()>
where W: Write
{
    writeln!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.6f"))
}

fn ruler<W>(w: &mut W, width: usize) -> io::Result<()>
where W: Write
{
    writeln!(w, "{}", "-".repeat(width))
}

/// Print transmission coefficients at the sampled barrier energies.
pub fn barrier_table<W>(w: &mut W, rows: &[BarrierRow]) -> io::Result<()>
where W: Write
{
    writeln!(w)?;
    writeln!(w, "Transmission at the sampled barrier energies")?;
    writeln!(
        w, "{:^12}  {:^12}  {:^12}  {:^12}  {:^12}",
        "z / ang", "z / bohr", "E / hartree", "T(E)", "ln T(E)",
    )?;
    ruler(w, 68)?;
    for row in rows.iter() {
        writeln!(
            w, "{:>12.6}  {:>12.6}  {:>12.6e}  {:>12.6e}  {:>12.6}",
            row.z_ang, row.z, row.energy, row.ln_t.exp(), row.ln_t,
        )?;
    }
    Ok(())
}

/// Print rate constants and fluxes, one temperature per row.
pub fn flux_table<W>(w: &mut W, rows: &[FluxRow]) -> io::Result<()>
where W: Write
{
    writeln!(w)?;
    writeln!(w, "Thermal rate constants and fluxes")?;
    writeln!(
        w, "{:^10}  {:^10}  {:^10}  {:^14}  {:^14}  {:^14}  {:^14}  {:^14}  {:^14}",
        "T / K", "1/T / 1/K", "beta / au",
        "k_cl", "k_tun", "k_tot", "j_cl", "j_tun", "j_tot",
    )?;
    ruler(w, 130)?;
    for row in rows.iter() {
        writeln!(
            w, "{:>10.2}  {:>10.4e}  {:>10.2}  {:>14.6e}  {:>14.6e}  {:>14.6e}  {:>14.6e}  {:>14.6e}  {:>14.6e}",
            row.temp, row.temp.recip(), row.beta,
            row.k_classic, row.k_tunnel, row.k_classic + row.k_tunnel,
            row.flux_classic, row.flux_tunnel,
            row.flux_classic + row.flux_tunnel,
        )?;
    }
    Ok(())
}

/// Print local Arrhenius parameters per rate channel, one temperature per
/// row.
pub fn arrhenius_table<W>(w: &mut W, rows: &[ArrheniusRow]) -> io::Result<()>
where W: Write
{
    writeln!(w)?;
    writeln!(w, "Local Arrhenius parameters per rate channel")?;
    writeln!(
        w, "{:^10}  {:^14}  {:^14}  {:^14}  {:^14}  {:^14}  {:^14}",
        "T / K", "Ea_cl / Eh", "A_cl", "Ea_tun / Eh", "A_tun",
        "Ea_tot / Eh", "A_tot",
    )?;
    ruler(w, 106)?;
    for row in rows.iter() {
        writeln!(
            w, "{:>10.2}  {:>14.6e}  {:>14.6e}  {:>14.6e}  {:>14.6e}  {:>14.6e}  {:>14.6e}",
            row.temp, row.classic.0, row.classic.1,
            row.tunnel.0, row.tunnel.1, row.total.0, row.total.1,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where F: FnOnce(&mut Vec<u8>) -> io::Result<()>
    {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn banner_carries_the_version() {
        let out = render(banner);
        assert!(out.contains(env!("CARGO_PKG_VERSION")), "got {out:?}");
    }

    #[test]
    fn barrier_rows_align_with_the_header() {
        let rows = [
            BarrierRow { z_ang: -2.645886, z: -5.0, energy: 0.0, ln_t: -2.0 },
        ];
        let out = render(|w| barrier_table(w, &rows));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2].len(), lines[3].len(), "header vs. ruler");
        assert!(lines[4].contains("1.353353e-1"), "got {:?}", lines[4]);
        assert!(lines[4].contains("-2.000000"), "got {:?}", lines[4]);
    }

    #[test]
    fn flux_rows_carry_channel_sums() {
        let rows = [
            FluxRow {
                temp: 300.0,
                beta: 1052.58,
                k_classic: 1.0e-23,
                k_tunnel: 3.0e-23,
                flux_classic: 2.0e-26,
                flux_tunnel: 6.0e-26,
            },
        ];
        let out = render(|w| flux_table(w, &rows));
        assert!(out.contains("4.000000e-23"), "got {out:?}");
        assert!(out.contains("8.000000e-26"), "got {out:?}");
    }

    #[test]
    fn arrhenius_rows_list_all_three_channels() {
        let rows = [
            ArrheniusRow {
                temp: 300.0,
                classic: (5.0e-2, 1.0),
                tunnel: (2.5e-2, 0.5),
                total: (3.0e-2, 0.75),
            },
        ];
        let out = render(|w| arrhenius_table(w, &rows));
        assert!(out.contains("5.000000e-2"), "got {out:?}");
        assert!(out.contains("2.500000e-2"), "got {out:?}");
        assert!(out.contains("7.500000e-1"), "got {out:?}");
    }
}
