//! Timing report for a finished run
//!
//! Controlled by the `BJ_REPORT` env var:
//! - Unset, empty or `0` → no report
//! - `1` → human-readable to stderr
//! - `json` → JSON to stderr
//! - `json:/path` → JSON to file

use crate::measurement::Measurement;
use crate::settings::Settings;
use std::io::Write;
use std::path::Path;
use tracing::warn;

pub const REPORT_ENV: &str = "BJ_REPORT";

// =============================================================================
// Report Configuration (parsed from BJ_REPORT env var)
// =============================================================================

/// Output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(String),
}

/// Parsed report configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl ReportConfig {
    /// Parse from the BJ_REPORT environment variable
    pub fn from_env() -> Option<Self> {
        let val = std::env::var(REPORT_ENV).ok()?;
        Self::parse(&val)
    }

    /// Parse a BJ_REPORT value
    pub fn parse(val: &str) -> Option<Self> {
        match val {
            "" | "0" => None,
            "1" => Some(ReportConfig {
                format: ReportFormat::Human,
                destination: ReportDestination::Stderr,
            }),
            "json" => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::Stderr,
            }),
            s if s.starts_with("json:") => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::File(s[5..].to_string()),
            }),
            _ => {
                warn!("{}='{}' not recognized, ignoring", REPORT_ENV, val);
                None
            }
        }
    }
}

// =============================================================================
// Report Data
// =============================================================================

/// Everything the report shows about one run
#[derive(Debug)]
pub struct ReportData {
    pub kernel: String,
    pub input_file: String,
    pub output_file: String,
    pub warmup: u32,
    pub repetitions: u32,
    pub min_ns: u64,
    pub median_ns: u64,
    pub mean_ns: u64,
    pub max_ns: u64,
    pub total_ns: u64,
    pub samples_ns: Vec<u64>,
}

impl ReportData {
    pub fn collect(
        kernel: &str,
        input: &Path,
        output: &Path,
        settings: &Settings,
        measurement: &Measurement,
    ) -> Self {
        ReportData {
            kernel: kernel.to_string(),
            input_file: input.display().to_string(),
            output_file: output.display().to_string(),
            warmup: settings.warmup,
            repetitions: settings.repetitions,
            min_ns: nanos(measurement.min()),
            median_ns: nanos(measurement.median()),
            mean_ns: nanos(measurement.mean()),
            max_ns: nanos(measurement.max()),
            total_ns: nanos(measurement.total()),
            samples_ns: measurement.samples.iter().copied().map(nanos).collect(),
        }
    }
}

fn nanos(d: std::time::Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

// =============================================================================
// Formatting
// =============================================================================

fn format_ns(ns: u64) -> String {
    if ns >= 1_000_000_000 {
        format!("{:.3} s", ns as f64 / 1e9)
    } else if ns >= 1_000_000 {
        format!("{:.3} ms", ns as f64 / 1e6)
    } else if ns >= 1_000 {
        format!("{:.3} us", ns as f64 / 1e3)
    } else {
        format!("{} ns", ns)
    }
}

pub fn format_human(data: &ReportData) -> String {
    let mut out = String::new();
    out.push_str("=== BJ REPORT ===\n");
    out.push_str(&format!("Kernel:       {}\n", data.kernel));
    out.push_str(&format!("Input:        {}\n", data.input_file));
    out.push_str(&format!("Output:       {}\n", data.output_file));
    out.push_str(&format!("Warmup:       {}\n", data.warmup));
    out.push_str(&format!("Repetitions:  {}\n", data.repetitions));
    out.push_str(&format!("Min:          {}\n", format_ns(data.min_ns)));
    out.push_str(&format!("Median:       {}\n", format_ns(data.median_ns)));
    out.push_str(&format!("Mean:         {}\n", format_ns(data.mean_ns)));
    out.push_str(&format!("Max:          {}\n", format_ns(data.max_ns)));
    out.push_str(&format!("Total:        {}\n", format_ns(data.total_ns)));
    out.push_str("=================\n");
    out
}

pub fn format_json(data: &ReportData) -> String {
    let mut map = serde_json::Map::new();
    map.insert(
        "kernel".into(),
        serde_json::Value::String(data.kernel.clone()),
    );
    map.insert(
        "input_file".into(),
        serde_json::Value::String(data.input_file.clone()),
    );
    map.insert(
        "output_file".into(),
        serde_json::Value::String(data.output_file.clone()),
    );
    map.insert("warmup".into(), serde_json::Value::Number(data.warmup.into()));
    map.insert(
        "repetitions".into(),
        serde_json::Value::Number(data.repetitions.into()),
    );
    map.insert("min_ns".into(), serde_json::Value::Number(data.min_ns.into()));
    map.insert(
        "median_ns".into(),
        serde_json::Value::Number(data.median_ns.into()),
    );
    map.insert(
        "mean_ns".into(),
        serde_json::Value::Number(data.mean_ns.into()),
    );
    map.insert("max_ns".into(), serde_json::Value::Number(data.max_ns.into()));
    map.insert(
        "total_ns".into(),
        serde_json::Value::Number(data.total_ns.into()),
    );
    map.insert(
        "samples_ns".into(),
        serde_json::Value::Array(
            data.samples_ns
                .iter()
                .map(|&ns| serde_json::Value::Number(ns.into()))
                .collect(),
        ),
    );

    let obj = serde_json::Value::Object(map);
    serde_json::to_string(&obj).unwrap_or_else(|_| "{}".to_string())
}

// =============================================================================
// Emit
// =============================================================================

pub fn emit_report(config: &ReportConfig, data: &ReportData) {
    let mut output = match config.format {
        ReportFormat::Human => format_human(data),
        ReportFormat::Json => format_json(data),
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }

    match &config.destination {
        ReportDestination::Stderr => {
            let _ = std::io::stderr().write_all(output.as_bytes());
        }
        ReportDestination::File(path) => {
            if let Err(e) = write_report_file(path, &output) {
                warn!("could not write report to {}: {}", path, e);
                let _ = std::io::stderr().write_all(output.as_bytes());
            }
        }
    }
}

fn write_report_file(path: &str, output: &str) -> std::io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    f.write_all(output.as_bytes())?;
    f.flush()
}

// =============================================================================
// Tests
// =============================================================================
