//! Weight command and query handlers.
//!
//! Membership changes (add, remove) rebalance with the configured strategy.
//! Manual edits are stored as given and only report balance; an explicit
//! `RebalanceCommand` applies a strategy on demand.

mod error;
mod shared;

// Command handlers
mod add_measure;
mod rebalance;
mod remove_measure;
mod update_weight;

// Query handlers
mod get_balance;

pub use error::WeightCommandError;

pub use add_measure::{AddMeasureCommand, AddMeasureHandler, AddMeasureResult};
pub use rebalance::{RebalanceCommand, RebalanceHandler, RebalanceResult};
pub use remove_measure::{RemoveMeasureCommand, RemoveMeasureHandler, RemoveMeasureResult};
pub use update_weight::{UpdateWeightCommand, UpdateWeightHandler, UpdateWeightResult};

pub use get_balance::{BalanceView, GetBalanceHandler, GetBalanceQuery};
