//! Core definitions (error types, status codes and argument verification helpers),
//! relied upon by all recvec-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind, Status};
pub use result::Result;
