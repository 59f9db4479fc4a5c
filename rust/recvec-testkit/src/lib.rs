//! Test utilities and the conformance suite for the recvec crates.
//!
//! This crate provides:
//! - Instrumented allocators for observing and failing allocations
//! - A small harness of named cases with pass/fail reporting
//! - The conformance suite exercising every `RecordVec` operation against
//!   known input/output sequences
//!
//! # Usage
//!
//! The suite is run by `recvec-cmd run` and by this crate's integration tests.

pub mod alloc;
pub mod cases;
pub mod harness;

pub use harness::{Case, CaseFailure, CaseResult, Report};
