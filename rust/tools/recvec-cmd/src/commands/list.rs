use std::process::ExitCode;

use anyhow::Result;
use recvec_testkit::{cases, harness};

pub fn run(filter: Option<String>) -> Result<ExitCode> {
    let cases = cases::all();
    for case in harness::select(&cases, filter.as_deref()) {
        println!("{}", case.name);
    }
    Ok(ExitCode::SUCCESS)
}
