//! Small self-contained helpers.

mod nested;

pub use nested::get_nested_value;
