//! bj: a harness for single-kernel micro-benchmarks
//!
//! A kernel plugs into the harness by implementing [`Setup`]. The harness
//! owns everything around the computation:
//! - reading one JSON value from the input file
//! - warmup and timed repetitions of the kernel
//! - writing one JSON value to the output file
//! - the optional at-exit report (see `BJ_REPORT`)
//!
//! # Modules
//!
//! - `error`: Harness error type
//! - `settings`: Run settings (warmup, repetitions) from TOML or flags
//! - `measurement`: Per-repetition timings and their summary
//! - `perform`: The `Setup` trait and the `perform` driver
//! - `report`: Human/JSON timing report

pub mod error;
pub mod measurement;
pub mod perform;
pub mod report;
pub mod settings;

pub use error::HarnessError;
pub use measurement::Measurement;
pub use perform::{Setup, perform};
pub use report::{ReportConfig, ReportDestination, ReportFormat};
pub use settings::Settings;
