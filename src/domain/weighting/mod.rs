//! Weighting Module - Balancing the weights of an objective's key results.
//!
//! All sibling weights under one objective must sum to 100%. This module
//! keeps sibling sets valid and computes stable adjustments when they drift.
//!
//! # Components
//!
//! - `WeightEngine` - Total, balance check, auto-balance, normalize, adjustment preview
//! - `WeightedItem` - One sub-measure with its weight and lock flag
//! - `BalanceReport` - Advisory validation result for display
//! - `SuggestedAdjustment` - One row of a normalize preview
//! - `Tolerance` - How close to 100% counts as balanced
//! - `RebalanceStrategy` - Which operation a caller applies after a change
//!
//! # Design Philosophy
//!
//! The engine is pure and synchronous. It takes a snapshot of one sibling set
//! and returns a new one; persistence and concurrency belong to the caller.

mod adjustment;
mod balance;
mod engine;
mod events;
mod item;
mod rounding;
mod strategy;
mod tolerance;

pub use adjustment::SuggestedAdjustment;
pub use balance::BalanceReport;
pub use engine::{WeightEngine, ADJUSTMENT_THRESHOLD, TARGET_TOTAL};
pub use events::{RebalanceTrigger, WeightsEdited, WeightsRebalanced};
pub use item::WeightedItem;
pub use rounding::round_to_hundredths;
pub use strategy::RebalanceStrategy;
pub use tolerance::Tolerance;
