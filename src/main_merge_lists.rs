use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dataset_lists::logging;
use dataset_lists::merge::{merge_split, SplitOutcome, MERGE_SPLITS};

/// Merge *_train/val/test.txt into train/val/test.txt
#[derive(Parser, Debug)]
#[command(name = "merge_lists", version)]
struct Args {
    /// Folder containing files like remove_train.txt, rotate_val.txt, etc.
    #[arg(long)]
    dir: PathBuf,
    /// Where to write merged files (default: same as --dir).
    #[arg(long)]
    outdir: Option<PathBuf>,
    /// Log every input file read to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let outdir = args.outdir.as_deref().unwrap_or(args.dir.as_path());
    for split in MERGE_SPLITS {
        let outcome = merge_split(&args.dir, split, outdir)
            .with_context(|| format!("merging {split} lists in {}", args.dir.display()))?;

        match outcome {
            SplitOutcome::NoInputs { split, dir } => {
                println!("{} no *_{split}.txt files in {}", "[warn]".yellow(), dir.display());
            }
            SplitOutcome::Merged(summary) => {
                println!(
                    "{} {}: merged {} files -> {} ({} lines)",
                    "[ok]".green(),
                    summary.split,
                    summary.sources,
                    summary.path.display(),
                    summary.lines
                );
            }
        }
    }

    Ok(())
}
