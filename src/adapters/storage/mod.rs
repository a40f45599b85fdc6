//! Storage adapters for sibling sets.
//!
//! - `InMemorySiblingSets` - Process-local storage for tests and embedding

mod in_memory_sibling_sets;

pub use in_memory_sibling_sets::InMemorySiblingSets;
