//! Leafkit utility helpers: umbrella crate.
//!
//! This crate re-exports all Leafkit components for convenience.
//! Use feature flags to enable specific functionality:
//!
//! | Feature | Module |
//! |---|---|
//! | (always) | [`core`]: errors, zero-value selection, paths |
//! | `fs` | `fs`: file and directory helpers |
//! | `validation` | `validation`: struct field validation |
//! | `dates` | `dates`: date layouts |
//! | `full` | all of the above |

pub use leafkit_core as core;
pub use leafkit_core::{Error, IsZero, Result, first_non_zero, pick};

#[cfg(feature = "fs")]
pub use leafkit_fs as fs;

#[cfg(feature = "validation")]
pub use leafkit_validation as validation;

#[cfg(feature = "dates")]
pub use leafkit_dates as dates;
