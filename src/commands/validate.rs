use log::{debug, info};

use crate::cli::ValidateArgs;
use crate::document::Document;
use crate::output::to_config;
use crate::{EXIT_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result};

/// Outcome of checking every chart in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub charts: usize,
    pub datasets: usize,
    pub axes: usize,
    /// One line per chart that failed, in document order.
    pub problems: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Builds, validates and encodes each chart, collecting the first problem of each.
#[must_use]
pub fn validate_document(document: &Document) -> ValidationReport {
    let mut report = ValidationReport {
        charts: document.charts.len(),
        ..ValidationReport::default()
    };

    for (index, spec) in document.charts.iter().enumerate() {
        report.datasets += spec.datasets.len();
        let checked = spec.build().and_then(|chart| {
            report.axes += chart.axes().len();
            chart.validate()?;
            to_config(&chart)
        });
        if let Err(e) = checked {
            debug!(chart = index, error_type = e.error_type(); "Chart failed validation");
            report.problems.push(format!("chart {index}: {e}"));
        }
    }

    report
}

#[must_use]
pub fn run_validate(args: &ValidateArgs) -> i32 {
    match run_validate_impl(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Checks a chart description and prints a summary.
///
/// # Errors
/// Returns an error if the document cannot be read or parsed.
pub fn run_validate_impl(args: &ValidateArgs) -> Result<i32> {
    let document = Document::load(&args.input)?;
    let report = validate_document(&document);
    info!(charts = report.charts, problems = report.problems.len(); "Validated document");

    if report.is_ok() {
        println!(
            "{}: {} chart(s), {} dataset(s), {} axis(es) OK",
            args.input.display(),
            report.charts,
            report.datasets,
            report.axes
        );
        return Ok(EXIT_SUCCESS);
    }

    println!(
        "{}: {} of {} chart(s) invalid",
        args.input.display(),
        report.problems.len(),
        report.charts
    );
    for problem in &report.problems {
        println!("  {problem}");
    }
    Ok(EXIT_VALIDATION_FAILED)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
