//! Support code for the `qtp2` command-line driver.

pub mod input;
pub mod report;
