//! In-Memory Adapters
//!
//! - **InMemoryAlternativeSource** - Serves a fixed table (testing/embedding)

mod in_memory_alternative_source;

pub use in_memory_alternative_source::InMemoryAlternativeSource;
