//! enroll-review library interface
//!
//! Exposes the workflow pieces so integration tests can drive a full run
//! without the console front end.

pub mod console;
pub mod driver;
pub mod queue;
pub mod records;
pub mod review;
