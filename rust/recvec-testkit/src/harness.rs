//! A minimal runner for named conformance cases.
//!
//! A case is a plain function returning [`CaseResult`]. The runner executes the
//! selected cases in order, isolates panics, and collects the outcome into a
//! [`Report`].

use std::panic::{self, AssertUnwindSafe};

/// Why a case did not pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure(pub String);

impl std::fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<recvec::Error> for CaseFailure {
    fn from(e: recvec::Error) -> Self {
        CaseFailure(format!("unexpected error: {e}"))
    }
}

pub type CaseResult = std::result::Result<(), CaseFailure>;

/// Fails the enclosing case unless the condition holds.
#[macro_export]
macro_rules! check {
    ($cond:expr) => {
        if !($cond) {
            return Err($crate::harness::CaseFailure(format!(
                "{}:{}: check failed: {}",
                file!(),
                line!(),
                stringify!($cond)
            )));
        }
    };
}

/// Fails the enclosing case unless both values are equal.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left, right) => {
                if *left != *right {
                    return Err($crate::harness::CaseFailure(format!(
                        "{}:{}: {} == {} failed: {:?} != {:?}",
                        file!(),
                        line!(),
                        stringify!($left),
                        stringify!($right),
                        left,
                        right
                    )));
                }
            }
        }
    };
}

/// A named conformance case.
#[derive(Clone, Copy)]
pub struct Case {
    pub name: &'static str,
    pub run: fn() -> CaseResult,
}

impl std::fmt::Debug for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Case").field("name", &self.name).finish()
    }
}

/// A failed case and its message.
#[derive(Debug, Clone)]
pub struct Failure {
    pub name: &'static str,
    pub message: String,
}

/// Outcome of a suite run.
#[derive(Debug, Default, Clone)]
pub struct Report {
    pub passed: usize,
    pub failures: Vec<Failure>,
    /// Cases not run because of fail-fast.
    pub skipped: usize,
}

impl Report {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed() + self.skipped
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} passed, {} failed", self.passed, self.failed())?;
        if self.skipped != 0 {
            write!(f, ", {} skipped", self.skipped)?;
        }
        Ok(())
    }
}

/// Options controlling a suite run.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Only run cases whose name contains this substring.
    pub filter: Option<String>,
    /// Stop at the first failure.
    pub fail_fast: bool,
}

/// Returns the cases selected by `filter` (all cases if `None`).
pub fn select<'a>(cases: &'a [Case], filter: Option<&'a str>) -> impl Iterator<Item = &'a Case> {
    cases
        .iter()
        .filter(move |case| filter.is_none_or(|f| case.name.contains(f)))
}

/// Runs a single case, turning a panic into a failure.
pub fn run_case(case: &Case) -> CaseResult {
    match panic::catch_unwind(AssertUnwindSafe(case.run)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_string());
            Err(CaseFailure(format!("panicked: {message}")))
        }
    }
}

/// Runs the selected cases and collects the outcome.
pub fn run(cases: &[Case], options: &RunOptions) -> Report {
    let selected: Vec<&Case> = select(cases, options.filter.as_deref()).collect();
    let mut report = Report::default();

    for (i, case) in selected.iter().enumerate() {
        match run_case(case) {
            Ok(()) => {
                log::debug!("case {} passed", case.name);
                report.passed += 1;
            }
            Err(failure) => {
                log::warn!("case {} failed: {failure}", case.name);
                report.failures.push(Failure {
                    name: case.name,
                    message: failure.0,
                });
                if options.fail_fast {
                    report.skipped = selected.len() - i - 1;
                    break;
                }
            }
        }
    }

    log::info!("conformance run: {report}");
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() -> CaseResult {
        check!(1 + 1 == 2);
        check_eq!(2 * 2, 4);
        Ok(())
    }

    fn failing() -> CaseResult {
        check_eq!(1, 2);
        Ok(())
    }

    fn panicking() -> CaseResult {
        panic!("boom");
    }

    fn erroring() -> CaseResult {
        recvec::RecordVec::new(0, 1)?;
        Ok(())
    }

    fn sample() -> Vec<Case> {
        vec![
            Case {
                name: "passing",
                run: passing,
            },
            Case {
                name: "failing",
                run: failing,
            },
            Case {
                name: "panicking",
                run: panicking,
            },
            Case {
                name: "erroring",
                run: erroring,
            },
        ]
    }

    #[test]
    fn test_run_collects_outcomes() {
        let report = run(&sample(), &RunOptions::default());
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed(), 3);
        assert_eq!(report.total(), 4);
        assert!(!report.is_success());
        assert_eq!(report.to_string(), "1 passed, 3 failed");

        let failing = &report.failures[0];
        assert_eq!(failing.name, "failing");
        assert!(failing.message.contains("1 == 2"));
        assert!(report.failures[1].message.contains("boom"));
        assert!(report.failures[2].message.contains("unexpected error"));
    }

    #[test]
    fn test_run_filter_and_fail_fast() {
        let report = run(
            &sample(),
            &RunOptions {
                filter: Some("ing".to_string()),
                fail_fast: true,
            },
        );
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.to_string(), "1 passed, 1 failed, 2 skipped");

        let names: Vec<_> = select(&sample(), Some("pa"))
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["passing"]);
    }
}
