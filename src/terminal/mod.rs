//! Shared terminal utilities.
//!
//! Box drawing for the interactive banner.

mod output;

pub use output::*;
