//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, events, errors)
//! - `weighting` - Pure weight balancing engine for sibling key results

pub mod foundation;
pub mod weighting;
