//! Command-line arguments

mod args;

pub use args::{parse, Args};
