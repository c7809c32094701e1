//! The demonstration driver.
//!
//! Constructs one [`CountedValue`](crate::value::CountedValue) per configured
//! length, then writes two lines: the square of the reported value and the
//! counter's count.

use crate::config::{CountedConfig, DEFAULT_LENGTHS};
use crate::counter::InstanceCounter;
use crate::errors::{Error, Result};
use crate::io::OutputDestination;
use crate::value::construct_all;
use tracing::info;

/// Resolved driver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub lengths: Vec<i32>,
    pub report_index: usize,
    pub parallel: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            lengths: DEFAULT_LENGTHS.to_vec(),
            report_index: 0,
            parallel: false,
        }
    }
}

impl RunConfig {
    /// Layer command-line overrides on top of file configuration.
    pub fn resolve(
        file: &CountedConfig,
        lengths: Vec<i32>,
        report: Option<usize>,
        parallel: Option<bool>,
    ) -> Self {
        Self {
            lengths: if lengths.is_empty() {
                file.lengths()
            } else {
                lengths
            },
            report_index: report.unwrap_or_else(|| file.report()),
            parallel: parallel.unwrap_or_else(|| file.parallel()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.lengths.is_empty() {
            return Err(Error::validation("at least one length is required"));
        }
        if self.report_index >= self.lengths.len() {
            return Err(Error::validation(format!(
                "report index {} out of range for {} value(s)",
                self.report_index,
                self.lengths.len()
            )));
        }
        Ok(())
    }
}

/// What a run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub value: i32,
    pub count: u64,
}

impl RunReport {
    pub fn render(&self) -> String {
        format!("{}\n{}\n", self.value, self.count)
    }
}

/// Construct the configured values against `counter` and report.
pub fn run(
    config: &RunConfig,
    counter: &InstanceCounter,
    destination: &dyn OutputDestination,
) -> Result<RunReport> {
    config.validate()?;
    info!(
        values = config.lengths.len(),
        parallel = config.parallel,
        "constructing counted values"
    );

    let values = construct_all(&config.lengths, counter, config.parallel);
    let reported = values[config.report_index];
    if reported.checked_value().is_none() {
        info!(length = reported.length(), "square overflowed i32 and wrapped");
    }

    let report = RunReport {
        value: reported.value(),
        count: counter.count(),
    };

    destination.write_str(&report.render())?;
    destination.flush()?;
    info!(count = report.count, destination = %destination.description(), "run complete");
    Ok(report)
}

/// Run against the process-wide counter.
pub fn run_global(config: &RunConfig, destination: &dyn OutputDestination) -> Result<RunReport> {
    run(config, &InstanceCounter::global(), destination)
}
