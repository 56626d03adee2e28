//! # Lingo Demo
//!
//! An integrating application for lingo: loads provider configuration,
//! initializes logging, and drives a simulated render loop over a small page
//! with a heading, a paragraph, and a language switch button.
//!
//! English ships with the application while Vietnamese is loaded on demand,
//! so switching to it shows the fallback for one frame.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;
pub mod logging;

pub use app::*;
pub use error::*;
pub use logging::*;
