//! Unit test suite for leafkit-fs.
//!
//! Exercises the public API end to end against scratch directories.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod unit;
