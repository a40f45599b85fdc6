//! Event bus adapters.
//!
//! - `InMemoryEventBus` - Recording, in-process bus for tests and embedding

mod in_memory;

pub use in_memory::InMemoryEventBus;
