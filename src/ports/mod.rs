//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SiblingSetRepository` - Load and persist an objective's weighted key results
//! - `EventPublisher` - Announce weight changes to downstream consumers

mod event_publisher;
mod sibling_set_repository;

pub use event_publisher::EventPublisher;
pub use sibling_set_repository::SiblingSetRepository;
