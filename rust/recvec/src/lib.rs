//! A growable, contiguous vector of fixed-size opaque records.
//!
//! [`RecordVec`] stores records of a uniform byte width chosen at creation. It
//! manages capacity growth, shifts records for insertion and removal at arbitrary
//! positions, and checks every size computation for overflow. All mutators are
//! built on a single splice primitive, [`RecordVec::replace`], and are
//! all-or-nothing: an operation that fails leaves the vector untouched.
//!
//! ```
//! use recvec::RecordVec;
//!
//! let mut v = RecordVec::for_type::<i32>(25).unwrap();
//! v.insert_typed(0, &[2i32, 3, 4]).unwrap();
//! v.insert_typed(0, &[0i32, 1]).unwrap();
//! assert_eq!(v.typed_data::<i32>().unwrap(), &[0, 1, 2, 3, 4]);
//!
//! v.erase(1, 4).unwrap();
//! assert_eq!(v.typed_data::<i32>().unwrap(), &[0, 4]);
//! ```

pub mod alloc;
pub mod policy;
mod typed;
mod vector;

pub use alloc::{Global, RawAllocator};
pub use recvec_common::{Error, ErrorKind, Result, Status};
pub use vector::RecordVec;
