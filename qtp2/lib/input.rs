//! Datafile parsing and the temperature range descriptor.

use std::{ fs, path::Path };
use anyhow::{ Context, ensure };
use ndarray as nd;

/// Parse barrier samples from datafile text.
///
/// Values are whitespace-separated decimal numbers read as an alternating
/// flat stream z, U, z, U, ... with positions in bohr and energies in
/// hartrees. Lines whose first non-blank character is `#` are comments.
pub fn parse_barrier_text(text: &str)
    -> anyhow::Result<(nd::Array1<f64>, nd::Array1<f64>)>
{
    let mut values: Vec<f64> = Vec::new();
    for (k, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        for tok in line.split_whitespace() {
            let val: f64 = tok.parse()
                .with_context(|| format!("bad value {tok:?} on line {}", k + 1))?;
            values.push(val);
        }
    }
    ensure!(!values.is_empty(), "datafile contains no samples");
    ensure!(
        values.len() % 2 == 0,
        "expected an even number of values (z, U pairs), got {}",
        values.len(),
    );
    let z: nd::Array1<f64> = values.iter().copied().step_by(2).collect();
    let u: nd::Array1<f64> = values.iter().copied().skip(1).step_by(2).collect();
    Ok((z, u))
}

/// Read and parse a barrier datafile.
pub fn read_barrier_file(path: &Path)
    -> anyhow::Result<(nd::Array1<f64>, nd::Array1<f64>)>
{
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read datafile {}", path.display()))?;
    parse_barrier_text(&text)
        .with_context(|| format!("failed to parse datafile {}", path.display()))
}

/// Validated temperature range in kelvin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TemperatureSweep {
    start: f64,
    stop: f64,
    step: f64,
}

impl TemperatureSweep {
    /// Validate a range; `stop` defaults to `start`.
    pub fn new(start: f64, stop: Option<f64>, step: f64)
        -> anyhow::Result<Self>
    {
        ensure!(start > 0.0, "temperature must be positive, got {start} K");
        ensure!(step > 0.0, "temperature step must be positive, got {step} K");
        let stop = stop.unwrap_or(start);
        ensure!(
            stop >= start,
            "final temperature {stop} K lies below the initial {start} K",
        );
        Ok(Self { start, stop, step })
    }

    /// Resolve to the ordered temperatures start, start + step, ..., taking
    /// every value below stop + step/2; the last one may overshoot stop by
    /// up to half a step.
    pub fn resolve(&self) -> Vec<f64> {
        let bound = self.stop + self.step / 2.0;
        (0..).map(|k| self.start + k as f64 * self.step)
            .take_while(|t| *t < bound)
            .collect()
    }
}
