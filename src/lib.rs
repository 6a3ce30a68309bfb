//! resgen - typed accessors for a resource directory
//!
//! resgen is a CLI tool and library that turns a resource directory
//! (`drawable/`, `font/`, with qualified variants such as `drawable-dark-xhdpi/`)
//! into Rust modules exposing one immutable descriptor per logical resource.
//! Accessors are split into bounded shard modules so that generated files stay
//! small however large the resource set grows.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Generation pipeline (collect, allocate, partition, emit)
//! - `error`: Errors rejecting a resource tree
//! - `runtime`: Types referenced by generated code

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod runtime;
