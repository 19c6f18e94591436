//! Drives sensor packages through summary generation and output.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{ErrorPolicy, OutputFormat, Settings};
use crate::models::{InfoMessage, Package};
use crate::package::read_package;
use crate::training::Training;

/// Outcome of [`process_batch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
}

/// The three reference packages, one per workout kind.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Writes the summary line of `training` to `out`.
pub fn show(training: &dyn Training, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", training.summary())
}

fn write_info(info: &InfoMessage, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{info}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, info)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Processes `packages` in order, writing one summary per workout.
///
/// A package that fails to build stops the batch under
/// [`ErrorPolicy::Abort`] and is logged and counted under
/// [`ErrorPolicy::Skip`]. Output errors always stop the batch.
pub fn process_batch(
    packages: &[Package],
    settings: &Settings,
    out: &mut impl Write,
) -> anyhow::Result<BatchReport> {
    let mut report = BatchReport::default();

    for (index, package) in packages.iter().enumerate() {
        let workout = match read_package(&package.code, &package.data) {
            Ok(workout) => workout,
            Err(e) => match settings.on_error {
                ErrorPolicy::Abort => {
                    return Err(e).with_context(|| {
                        format!("Failed to read package #{index} ({})", package.code)
                    });
                }
                ErrorPolicy::Skip => {
                    warn!(index, code = %package.code, "Skipping package: {e}");
                    report.skipped += 1;
                    continue;
                }
            },
        };

        write_info(&workout.summary(), settings.format, out)
            .with_context(|| format!("Failed to write summary for package #{index}"))?;
        report.processed += 1;
    }

    info!(
        processed = report.processed,
        skipped = report.skipped,
        "Batch complete"
    );
    Ok(report)
}
