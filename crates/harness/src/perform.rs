//! The kernel contract and the driver that runs it

use crate::error::HarnessError;
use crate::measurement::Measurement;
use crate::report::{ReportConfig, ReportData, emit_report};
use crate::settings::Settings;
use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// A benchmark kernel
///
/// `input` and `output` are the serialization boundary; `compute` is the
/// only part that gets timed.
pub trait Setup {
    type Input: Clone;
    type Output;

    /// Kernel name shown in logs and reports
    fn name(&self) -> &str;

    /// Convert the decoded input document into the kernel's argument
    fn input(&self, src: &serde_json::Value) -> Result<Self::Input, HarnessError>;

    fn compute(&self, x: Self::Input) -> Self::Output;

    /// Convert the kernel's result into the output document
    fn output(&self, x: Self::Output) -> serde_json::Value;
}

/// Read the input file, run the kernel, write the output file
///
/// Runs `settings.warmup` untimed calls followed by `settings.repetitions`
/// timed calls. The result of the last timed call is written. The output
/// file is not touched unless every earlier step succeeded.
pub fn perform<S: Setup>(
    setup: &S,
    input_path: &Path,
    output_path: &Path,
    settings: &Settings,
) -> Result<Measurement, HarnessError> {
    settings.validate()?;

    debug!("reading {}", input_path.display());
    let raw = fs::read_to_string(input_path).map_err(|e| HarnessError::io(input_path, e))?;
    let doc: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| HarnessError::json(input_path, e))?;
    let x = setup.input(&doc)?;

    for _ in 0..settings.warmup {
        black_box(setup.compute(black_box(x.clone())));
    }
    debug!("{}: {} warmup run(s) done", setup.name(), settings.warmup);

    let mut samples = Vec::new();
    let mut result = None;
    for _ in 0..settings.repetitions {
        let arg = black_box(x.clone());
        let start = Instant::now();
        let out = black_box(setup.compute(arg));
        samples.push(start.elapsed());
        result = Some(out);
    }
    let measurement = Measurement::new(samples);

    // repetitions >= 1 was validated above
    let result = result.ok_or_else(|| {
        HarnessError::Settings("repetitions must be at least 1".to_string())
    })?;

    let mut text = serde_json::to_string(&setup.output(result))
        .map_err(|e| HarnessError::json(output_path, e))?;
    text.push('\n');
    fs::write(output_path, text).map_err(|e| HarnessError::io(output_path, e))?;

    info!(
        "{}: {} run(s), min {:?}, median {:?}",
        setup.name(),
        measurement.len(),
        measurement.min(),
        measurement.median()
    );

    if let Some(config) = ReportConfig::from_env() {
        let data = ReportData::collect(
            setup.name(),
            input_path,
            output_path,
            settings,
            &measurement,
        );
        emit_report(&config, &data);
    }

    Ok(measurement)
}
