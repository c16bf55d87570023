//! # LearnForge Shared Library
//!
//! This crate contains the domain record types shared between the LearnForge
//! storage layer and its consumers (API handlers, the achievement evaluator,
//! seed tooling).
//!
//! ## Module Organization
//!
//! - `models`: Domain records, insert/patch record shapes, and the pure
//!   merge rules applied on update

pub mod models;

/// Current version of the LearnForge shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
