//! Zero-value detection and default selection.
//!
//! Two questions come up constantly when merging caller input with defaults:
//! "is this key set?" and "is this value empty?". They are different
//! questions and this module keeps them apart:
//!
//! - [`pick`] answers the first one. A key that is present wins, even when
//!   the stored value is itself empty.
//! - [`first_non_zero`] answers the second one. It walks candidates in order
//!   and returns the first value whose [`IsZero::is_zero`] is false.
//!
//! # Zero values
//!
//! [`IsZero`] is implemented for the std types where "empty" has an obvious
//! meaning (numbers, strings, booleans, `Option`, collections, paths,
//! durations). User types opt in explicitly: structs field by field with
//! [`impl_is_zero_fields!`](crate::impl_is_zero_fields), fieldless enums by
//! equality with their default through
//! [`impl_is_zero_via_default!`](crate::impl_is_zero_via_default).
//! A type without an impl does not compile; there is no "unknown means
//! non-empty" fallback.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use leafkit_core::values::{first_non_zero, pick};
//!
//! let mut settings = HashMap::new();
//! settings.insert("mode", String::new());
//!
//! // Present-but-empty still wins over the default.
//! assert_eq!(pick(&settings, &"mode", "fast".to_string()), "");
//! assert_eq!(pick(&settings, &"level", "3".to_string()), "3");
//!
//! let flag: Option<&str> = None;
//! let env_value = Some("");
//! let file_value = Some("filled");
//! assert_eq!(first_non_zero([flag, env_value, file_value]), Some("filled"));
//! ```

mod pick;
mod proptests;
mod zero;

pub use pick::{Lookup, first_non_zero, pick, pick_or_else};
pub use zero::{IsZero, is_default};
