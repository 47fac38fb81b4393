use super::PlanError;
use serde::Serialize;
use tracing::debug;

/// Result of splitting a sentence count into fixed-size batches.
///
/// Only [`BatchPlanner::plan`] builds one, so `batch_size` is always positive
/// and `remainder` is always below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPlan {
    batch_size: u64,
    full_batch_count: u64,
    remainder: u64,
}

/// One batch when enumerating a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// Zero-based batch number
    pub index: u64,
    /// Offset of the first sentence in the batch
    pub start: u64,
    /// Number of sentences in the batch
    pub len: u64,
}

impl Batch {
    /// One past the last sentence offset
    pub fn end(&self) -> u64 {
        self.start + self.len
    }
}

pub struct BatchPlanner;

impl BatchPlanner {
    /// Compute the batch plan for `sentence_count` sentences.
    ///
    /// Signed inputs are accepted so that bad values coming from the CLI or a
    /// document descriptor are rejected here rather than wrapping around.
    pub fn plan(sentence_count: i64, batch_size: i64) -> Result<BatchPlan, PlanError> {
        if batch_size <= 0 {
            return Err(PlanError::InvalidArgument(format!(
                "batch size must be positive, got {}",
                batch_size
            )));
        }

        if sentence_count < 0 {
            return Err(PlanError::InvalidArgument(format!(
                "sentence count must not be negative, got {}",
                sentence_count
            )));
        }

        let sentence_count = sentence_count as u64;
        let batch_size = batch_size as u64;

        let plan = BatchPlan {
            batch_size,
            full_batch_count: sentence_count / batch_size,
            remainder: sentence_count % batch_size,
        };

        debug!(
            sentence_count,
            batch_size,
            full_batches = plan.full_batch_count,
            remainder = plan.remainder,
            "computed batch plan"
        );

        Ok(plan)
    }
}

impl BatchPlan {
    /// Target number of sentences per batch
    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Number of batches holding exactly `batch_size` sentences
    pub fn full_batch_count(&self) -> u64 {
        self.full_batch_count
    }

    /// Size of the trailing partial batch
    pub fn remainder(&self) -> u64 {
        self.remainder
    }

    /// Number of sentences the plan covers
    pub fn total_sentences(&self) -> u64 {
        self.full_batch_count * self.batch_size + self.remainder
    }

    pub fn has_partial_batch(&self) -> bool {
        self.remainder > 0
    }

    /// Number of batches including the trailing partial one, if any
    pub fn batch_count(&self) -> u64 {
        self.full_batch_count + u64::from(self.has_partial_batch())
    }

    /// Enumerate batches in order. A zero-length trailing batch is omitted.
    pub fn batches(&self) -> impl Iterator<Item = Batch> {
        let batch_size = self.batch_size;
        let full = (0..self.full_batch_count).map(move |index| Batch {
            index,
            start: index * batch_size,
            len: batch_size,
        });

        let partial = self.has_partial_batch().then(|| Batch {
            index: self.full_batch_count,
            start: self.full_batch_count * batch_size,
            len: self.remainder,
        });

        full.chain(partial)
    }
}
