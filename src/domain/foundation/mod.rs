//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! ranking domain.

mod errors;
mod percentage;

pub use errors::{DomainError, ErrorCode};
pub use percentage::Percentage;
