//! Objective Weights - Weight balancing and normalization for objectives
//!
//! Every key result under an objective carries a percentage weight, and the
//! siblings of one objective should total 100%. This crate checks that
//! balance, splits weight equally around locked items, rescales weights
//! proportionally with exact-sum rounding correction, and previews the
//! changes a rescale would make.
//!
//! The engine in [`domain::weighting`] is pure. Handlers in [`application`]
//! load and persist sibling sets through [`ports`] and publish events.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
