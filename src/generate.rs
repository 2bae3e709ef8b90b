use crate::error::FallbackError;
use crate::projection;
use crate::sample::write_sample_csv;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tracing::info;

/// Which branch produced the output file.
#[derive(Debug)]
pub enum Outcome {
    Projected { columns: Vec<String>, rows: usize },
    /// `reason` is `None` when there was no input file at all.
    Sample { reason: Option<FallbackError> },
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    Ok(())
}

/// Projects `input` onto `preferred` columns into `output`, or writes the
/// sample dataset when that is not possible.
///
/// Input problems never surface as errors. An `Err` means the output file
/// itself could not be written.
pub fn generate_output(input: &Path, output: &Path, preferred: &[String]) -> Result<Outcome> {
    ensure_parent_dir(output)?;

    let reason = if input.exists() {
        match projection::project(input, output, preferred) {
            Ok(p) => {
                return Ok(Outcome::Projected {
                    columns: p.columns,
                    rows: p.rows,
                });
            }
            Err(e) => Some(e),
        }
    } else {
        info!("input {} not found", input.display());
        None
    };

    write_sample_csv(output)
        .with_context(|| format!("writing sample to {}", output.display()))?;
    Ok(Outcome::Sample { reason })
}
