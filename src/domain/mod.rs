//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `topsis` - The TOPSIS ranking engine and its data model
//! - `projection` - Filter and sort views over a ranked table

pub mod foundation;
pub mod projection;
pub mod topsis;
