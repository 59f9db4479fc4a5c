//! Command implementations for recvec-cmd

pub mod list;
pub mod run;
