//! Report output.
//!
//! Reports leave the process two ways: a pretty-printed JSON document on
//! disk, and a human-readable rendering on the console.

pub mod console;
pub mod json;

pub use console::{ConsoleRenderer, Palette};
pub use json::{write_report, ReportError};
