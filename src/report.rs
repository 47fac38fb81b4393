use crate::planner::BatchPlan;
use std::fmt;

/// Opening lines of the workflow, printed before the chapter is read
pub struct WorkflowPreamble<'a> {
    pub document: &'a str,
    /// Requested batch size, not yet validated
    pub batch_size: i64,
}

impl fmt::Display for WorkflowPreamble<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎯 Starting improved translation workflow for {}", self.document)?;
        writeln!(f, "📏 Batch size: {} sentences", self.batch_size)?;
        write!(f, "📖 Pre-reading phase...")
    }
}

/// Human-readable summary of a batch plan for one chapter
pub struct PlanReport<'a> {
    pub plan: &'a BatchPlan,
    /// Also print one line per batch
    pub list_batches: bool,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a BatchPlan) -> Self {
        Self {
            plan,
            list_batches: false,
        }
    }

    pub fn with_batch_list(mut self, list_batches: bool) -> Self {
        self.list_batches = list_batches;
        self
    }

    /// Plan as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.plan)
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.plan;

        writeln!(f, "📊 Chapter has {} sentences", plan.total_sentences())?;
        writeln!(
            f,
            "🔢 Will create {} full batches + {} in final batch",
            plan.full_batch_count(),
            plan.remainder()
        )?;

        if self.list_batches {
            writeln!(f)?;
            for batch in plan.batches() {
                writeln!(
                    f,
                    "  Batch {:>3}: sentences {}-{} ({} sentences)",
                    batch.index + 1,
                    batch.start + 1,
                    batch.end(),
                    batch.len
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "✅ Pre-read complete - ready for translation")?;
        writeln!(f, "💡 Benefits of this approach:")?;
        writeln!(f, "  • Complete context before starting")?;
        writeln!(f, "  • Smaller, manageable batches")?;
        writeln!(f, "  • Better quality control")?;
        write!(f, "  • Reduced cognitive load per session")
    }
}
