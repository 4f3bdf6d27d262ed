//! Small data-last helpers: percent ratios, confidence intervals, colors,
//! time and string formatting, identifiers and URL parts.

pub mod color;
pub mod config;
pub mod error;
pub mod ident;
pub mod keyboard;
pub mod logging;
pub mod math;
pub mod strings;
pub mod time;
pub mod url;

pub use error::{Result, UtilError};
