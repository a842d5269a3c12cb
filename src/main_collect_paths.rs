use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dataset_lists::collect::{collect_operation, OperationOutcome};
use dataset_lists::{logging, Operation};

/// Build lists of absolute image paths (1.png, 2.png) for each operation and split.
#[derive(Parser, Debug)]
#[command(name = "collect_paths", version)]
struct Args {
    /// Dataset root that contains remove/translate/rotate.
    #[arg(long)]
    root: PathBuf,
    /// Directory to write list files to. Defaults to each operation folder.
    #[arg(long)]
    outdir: Option<PathBuf>,
    /// Log every matched file and written list to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    for op in Operation::ALL {
        let outcome = collect_operation(&args.root, op, args.outdir.as_deref())
            .with_context(|| format!("collecting {op} under {}", args.root.display()))?;

        match outcome {
            OperationOutcome::Skipped { dir } => {
                println!("{} {} (not found)", "[skip]".yellow(), dir.display());
            }
            OperationOutcome::Written(lists) => {
                for list in lists {
                    println!("{} {}  ({} paths)", "[ok]".green(), list.path.display(), list.count);
                }
            }
        }
    }

    Ok(())
}
