//! Leafkit Dates: named date layouts.
//!
//! Dates travel between tools as strings in a handful of fixed layouts.
//! [`DateLayout`] names them, and [`parse`] / [`format`] convert between
//! those strings and UTC timestamps.

pub mod layout;
mod proptests;

pub use layout::{DateLayout, format, parse};
