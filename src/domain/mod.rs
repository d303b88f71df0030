//! Domain layer containing the scoring logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (enums, lifecycle trait, errors)
//! - `saw` - Simple Additive Weighting engine and its pure services

pub mod foundation;
pub mod saw;
