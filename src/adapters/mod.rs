//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - Event bus implementations
//! - `storage` - Sibling set storage implementations

pub mod events;
pub mod storage;

pub use events::InMemoryEventBus;
pub use storage::InMemorySiblingSets;
