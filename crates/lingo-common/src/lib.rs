//! # Lingo Common
//!
//! Shared types, utilities, and common functionality for the lingo crates.
//!
//! This crate provides the foundational types used across the workspace:
//! the [`LocaleId`] newtype, the workspace-wide [`LingoError`], and a few
//! string helpers used by configuration and logging.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
pub use utils::*;
