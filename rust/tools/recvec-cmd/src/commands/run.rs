//! Run command implementation

use std::process::ExitCode;

use anyhow::{Result, bail};
use recvec_testkit::{
    Report, cases,
    harness::{self, RunOptions},
};

pub fn run(filter: Option<String>, fail_fast: bool) -> Result<ExitCode> {
    let cases = cases::all();
    let options = RunOptions { filter, fail_fast };
    if harness::select(&cases, options.filter.as_deref()).next().is_none() {
        bail!(
            "no conformance case matches filter {:?}",
            options.filter.as_deref().unwrap_or_default()
        );
    }

    let report = harness::run(&cases, &options);
    for failure in &report.failures {
        println!("FAILED {}: {}", failure.name, failure.message);
    }
    println!("{report}");
    Ok(exit_code(&report))
}

/// The number of failed cases, saturated to fit an exit status.
fn exit_code(report: &Report) -> ExitCode {
    ExitCode::from(report.failed().min(u8::MAX as usize) as u8)
}

#[cfg(test)]
mod tests {
    use recvec_testkit::harness::Failure;

    use super::*;

    #[test]
    fn test_exit_code_saturates() {
        let mut report = Report {
            passed: 3,
            ..Default::default()
        };
        assert_eq!(exit_code(&report), ExitCode::SUCCESS);

        report.failures = (0..300)
            .map(|i| Failure {
                name: "case",
                message: format!("failure {i}"),
            })
            .collect();
        assert_eq!(exit_code(&report), ExitCode::from(255));
    }
}
