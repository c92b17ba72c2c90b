//! Built-in catalog content.
//!
//! This module contains only literal data: the standard enemy roster and the
//! standard mission definitions. Construction and validation live in
//! [`crate::roster`] and [`crate::catalog`].

pub mod enemies;
pub mod missions;
