//! Leafkit Validation: struct field checks against declared field metadata.
//!
//! A struct lists its fields through the [`Fields`] trait, marking each as
//! required or optional. [`validate_struct_fields`] then walks them,
//! treating a field as empty when its [`IsZero`](leafkit_core::IsZero) impl
//! says so.
//!
//! # Example
//!
//! ```
//! use leafkit_core::Error;
//! use leafkit_validation::{impl_fields, validate_struct_fields};
//!
//! struct Server { host: String, port: u16, banner: String }
//! impl_fields!(Server {
//!     required "host" => host,
//!     required "port" => port,
//!     optional "banner" => banner,
//! });
//!
//! let ok = Server { host: "0.0.0.0".into(), port: 8080, banner: String::new() };
//! assert_eq!(validate_struct_fields(&ok, "server.")?, vec!["server.banner"]);
//!
//! let bad = Server { host: String::new(), port: 0, banner: String::new() };
//! assert!(matches!(
//!     validate_struct_fields(&bad, ""),
//!     Err(Error::RequiredFieldsEmpty(_))
//! ));
//! # Ok::<(), Error>(())
//! ```

pub mod fields;
pub mod structs;

pub use fields::{Field, FieldValue, Fields};
pub use structs::validate_struct_fields;
