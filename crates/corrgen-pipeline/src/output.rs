//! Line-oriented text sink for generated clusters.

use std::io::{self, Write};

use corrgen_core::Real;

use crate::GeneratorResult;

const BANNER: &str = "########################################################";

/// Writes one cluster in the benchmark ground-truth format: a comment
/// header carrying the jitter summary and the dependency equations,
/// followed by one line per point with 4 decimal digits. A `label` token
/// is appended to every point line when given, so several clusters can
/// share one stream as a labeled dataset.
pub fn write_dataset<W: Write>(
    out: &mut W,
    result: &GeneratorResult,
    label: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    if let Some(jitter) = &result.jitter {
        writeln!(out, "### jitter {}%", jitter.percent)?;
        writeln!(out, "### nominal standard deviation {}", jitter.std_dev)?;
        writeln!(out, "### measured standard deviation {}", result.std_dev)?;
        writeln!(out, "###")?;
    }
    for row in result.dependency.equations.row_iter() {
        writeln!(out, "### {}", format_values(row.iter()))?;
    }
    writeln!(out, "{BANNER}")?;
    for p in &result.points {
        match label {
            Some(label) => writeln!(out, "{} {label}", format_values(p.iter()))?,
            None => writeln!(out, "{}", format_values(p.iter()))?,
        }
    }
    Ok(())
}

fn format_values<'a>(values: impl Iterator<Item = &'a Real>) -> String {
    values.map(|v| format!("{v:.4}")).collect::<Vec<_>>().join(" ")
}
