//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod weights;

pub use weights::{
    // Commands
    AddMeasureCommand, AddMeasureHandler, AddMeasureResult,
    RebalanceCommand, RebalanceHandler, RebalanceResult,
    RemoveMeasureCommand, RemoveMeasureHandler, RemoveMeasureResult,
    UpdateWeightCommand, UpdateWeightHandler, UpdateWeightResult,
    // Queries
    BalanceView, GetBalanceHandler, GetBalanceQuery,
    // Errors
    WeightCommandError,
};
