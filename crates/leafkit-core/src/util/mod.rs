//! Path handling helpers.
//!
//! # Modules
//!
//! - [`paths`]: Expansion, containment checks, upward marker search
//! - [`resolver`]: Configurable project path resolution

pub mod paths;
pub mod resolver;
