//! Five 3-D line clusters written as labeled benchmark files.
//!
//! 1. Share one generator configuration (unit cube, 0.1% jitter).
//! 2. Generate 1000 points along each of five line directions through the
//!    cube centroid.
//! 3. Write every cluster with its label to `g1.txt` .. `g5.txt`.
//!
//! Run with: cargo run -p corrgen --example lines3d

use std::fs::File;
use std::io::BufWriter;

use anyhow::Result;
use corrgen::prelude::*;

fn main() -> Result<()> {
    let config = GeneratorConfig::default();
    let directions: [[f64; 3]; 5] = [
        [1.0, -0.5, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];

    for (idx, dir) in directions.iter().enumerate() {
        let label = format!("g{}", idx + 1);
        let input = CorrelationInput {
            point: config.bounds.centroid(3),
            basis: Mat::from_column_slice(3, 1, dir),
            num_points: 1000,
            jitter: true,
        };
        let result = generate_correlation(&input, &config)?;

        let path = format!("{label}.txt");
        let mut out = BufWriter::new(File::create(&path)?);
        write_dataset(&mut out, &result, Some(&label))?;
        println!(
            "{path}: {} points, measured standard deviation {:.6}",
            result.points.len(),
            result.std_dev
        );
    }
    Ok(())
}
