//! Foundation module - Shared domain primitives.
//!
//! Contains the enums, lifecycle trait and error types that form the
//! vocabulary of the scoring engine.

mod criterion_type;
mod engine_status;
mod errors;
mod state_machine;

pub use criterion_type::CriterionType;
pub use engine_status::EngineStatus;
pub use errors::{ErrorCode, SawError, ValidationError};
pub use state_machine::StateMachine;
