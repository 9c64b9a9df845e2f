use std::f64::consts::PI;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const OUTPUT_PATH: &str = "points.csv";
const N_POINTS: usize = 200;
const SEED: u64 = 42;

#[derive(Debug, Serialize)]
struct Row {
    x: f64,
    net: f64,
    target: f64,
}

/// `n` evenly spaced samples of `sin(x)` over `[-π, π]`, each paired with a
/// stand-in network output: the target plus a smooth bias and a little
/// jitter.
fn generate_rows(n: usize, rng: &mut impl Rng) -> Vec<Row> {
    let step = if n > 1 { 2.0 * PI / (n - 1) as f64 } else { 0.0 };
    (0..n)
        .map(|i| {
            let x = -PI + step * i as f64;
            let target = x.sin();
            let jitter = rng.gen_range(-1.0_f64..1.0);
            let net = target + 0.08 * (3.0 * x).cos() + 0.02 * jitter;
            Row { x, net, target }
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let rows = generate_rows(N_POINTS, &mut rng);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    for (i, row) in rows.iter().enumerate() {
        writer
            .serialize(row)
            .with_context(|| format!("writing row {i}"))?;
    }
    writer.flush().context("flushing CSV writer")?;

    log::info!("Wrote {} points to {OUTPUT_PATH}", rows.len());
    println!("Wrote {} points to {OUTPUT_PATH}", rows.len());
    Ok(())
}
