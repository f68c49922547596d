//! Motor TOPSIS - Motorcycle evaluation and recommendation
//!
//! This crate ranks motorcycles with the TOPSIS multi-criteria decision method
//! and projects the ranking into range-filtered recommendations and
//! per-criterion orderings.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
