mod error;
mod plan;

#[cfg(test)]
mod tests;

pub use error::PlanError;
pub use plan::{Batch, BatchPlan, BatchPlanner};

/// Batch size used when the caller does not pick one
pub const DEFAULT_BATCH_SIZE: i64 = 15;
