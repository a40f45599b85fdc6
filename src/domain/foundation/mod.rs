//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, event infrastructure and error types
//! that form the vocabulary of the objective weighting domain.

mod errors;
mod events;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::ObjectiveId;
pub use timestamp::Timestamp;
