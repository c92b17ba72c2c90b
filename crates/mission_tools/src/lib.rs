//! # Mission Tools
//!
//! Command-line tools for catalog authors:
//! - Data validation (built-in content plus extra RON mission files)
//! - Mission listing and per-mission breakdowns
//! - RON / JSON export of the resolved catalog

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod export;
pub mod render;
pub mod validate;
