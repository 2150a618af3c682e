//! Testing infrastructure for tsptree tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `TestWorld`: Fluent interface for declarative CLI test setup
//! - `assertions`: Custom assertions over `--format json` output
//! - `fixtures`: Entry builders and sample tree documents

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
