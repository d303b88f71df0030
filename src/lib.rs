//! SAW Engine - Simple Additive Weighting decision scoring
//!
//! This crate ranks alternatives against weighted benefit and cost criteria,
//! then checks how robust the top choice is when one criterion's weight moves.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
