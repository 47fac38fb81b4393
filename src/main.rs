use anyhow::{Context, Result};
use batch_planner::{
    BatchPlanner, DEFAULT_BATCH_SIZE, DocumentDescriptor, PlanReport, WorkflowPreamble, logging,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "batch-planner")]
#[command(about = "Plan fixed-size sentence batches for translating a chapter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Chapter JSON file with a `meta.sentenceCount` field
    chapter_file: PathBuf,

    /// Sentences per batch
    #[arg(
        default_value_t = DEFAULT_BATCH_SIZE,
        env = "BATCH_PLANNER_BATCH_SIZE",
        allow_negative_numbers = true
    )]
    batch_size: i64,

    /// Print every batch with its sentence range
    #[arg(short, long)]
    list: bool,

    /// Print the plan as JSON instead of the workflow summary
    #[arg(long, conflicts_with = "list")]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if !cli.json {
        let document = cli.chapter_file.display().to_string();
        println!(
            "{}",
            WorkflowPreamble {
                document: &document,
                batch_size: cli.batch_size,
            }
        );
    }

    let output = run(&cli)?;
    println!("{}", output);

    Ok(())
}

/// Load the chapter, plan its batches and render the output text
fn run(cli: &Cli) -> Result<String> {
    let descriptor = DocumentDescriptor::from_path(&cli.chapter_file)
        .context("Failed to load chapter metadata")?;

    let plan = BatchPlanner::plan(descriptor.sentence_count(), cli.batch_size)
        .with_context(|| format!("Failed to plan batches for {}", cli.chapter_file.display()))?;

    info!(
        batches = plan.batch_count(),
        full_batches = plan.full_batch_count(),
        remainder = plan.remainder(),
        "batch plan ready"
    );

    let report = PlanReport::new(&plan).with_batch_list(cli.list);

    if cli.json {
        report.to_json().context("Failed to serialize plan")
    } else {
        Ok(report.to_string())
    }
}
