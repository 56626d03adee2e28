//! # Lingo Config
//!
//! Type-safe configuration for lingo translation providers.
//!
//! This crate provides the provider configuration schema, its defaults,
//! loading from YAML or TOML with environment overrides, and validation.
//! Only provider settings live here; translation tables are always supplied
//! in memory by the integrating application.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
