//! Type system for property values.

mod value;

pub use value::Value;
