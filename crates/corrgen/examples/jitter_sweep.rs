//! Re-jitters one generated cluster at several noise levels.
//!
//! 1. Generate a base cluster of 4000 points on a plane in the unit cube,
//!    without jitter.
//! 2. For each jitter percentage 1..=5, displace the stored points along
//!    the stored normal directions and measure the realized deviation.
//! 3. Write each variant to its own file.
//!
//! Run with: cargo run -p corrgen --example jitter_sweep

use std::fs::File;
use std::io::BufWriter;

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};

use corrgen::pipeline::{jitter_point, standard_deviation, JitterInfo};
use corrgen::prelude::*;

fn main() -> Result<()> {
    let config = GeneratorConfig::default();
    let dim = 3;
    let input = CorrelationInput {
        point: config.bounds.centroid(dim),
        basis: Mat::from_column_slice(dim, 2, &[1.0, 0.0, 0.5, 0.0, 1.0, 0.5]),
        num_points: 4000,
        jitter: false,
    };
    let base = generate_correlation(&input, &config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    for pct in 1..=5u32 {
        let percent = Real::from(pct);
        let std_dev = percent / 100.0 * config.bounds.diagonal(dim);
        let mut points = Vec::with_capacity(base.points.len());
        for p in &base.points {
            points.push(jitter_point(p, &base.dependency.normals, std_dev, &mut rng)?);
        }
        let measured = standard_deviation(&points, &input.point, &base.dependency.basis);

        let result = GeneratorResult {
            points,
            dependency: base.dependency.clone(),
            jitter: Some(JitterInfo { percent, std_dev }),
            std_dev: measured,
        };
        let path = format!("plane_jitter_{pct}.txt");
        let mut out = BufWriter::new(File::create(&path)?);
        write_dataset(&mut out, &result, None)?;
        println!("{path}: measured standard deviation {measured:.6}");
    }
    Ok(())
}
