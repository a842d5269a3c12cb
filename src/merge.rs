//! List merging: fold every `*_<split>.txt` in a directory into one
//! `<split>.txt`, keeping the first occurrence of each entry.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use indexmap::IndexSet;

use crate::dataset::Split;
use crate::error::{ListError, Result};
use crate::list_file::{read_entries, write_list};

/// Split order used when merging.
pub const MERGE_SPLITS: [Split; 3] = [Split::Train, Split::Val, Split::Test];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub split: Split,
    pub sources: usize,
    pub path: PathBuf,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// No `*_<split>.txt` in the source directory; no output written.
    NoInputs { split: Split, dir: PathBuf },
    Merged(MergeSummary),
}

/// Lists the regular files directly inside `dir` named `<prefix>_<split>.txt`,
/// sorted by path. Hidden files are not matched.
pub fn discover_split_files(dir: &Path, split: Split) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| ListError::NonUtf8Path(dir.to_path_buf()))?;
    let pattern = Path::new(&Pattern::escape(dir_str)).join(format!("*_{split}.txt"));
    let pattern = pattern
        .to_str()
        .ok_or_else(|| ListError::NonUtf8Path(pattern.clone()))?;

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let mut files = BTreeSet::new();
    for entry in glob_with(pattern, options)? {
        let path = entry?;
        if path.is_file() {
            files.insert(path);
        }
    }
    Ok(files.into_iter().collect())
}

/// Merges `files` in the given order, dropping repeated entries.
pub fn merge_files(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut merged = IndexSet::new();
    for file in files {
        let entries = read_entries(file)?;
        tracing::debug!(path = %file.display(), entries = entries.len(), "read list");
        merged.extend(entries);
    }
    Ok(merged.into_iter().collect())
}

/// Merges every `*_<split>.txt` in `src_dir` into `<out_dir>/<split>.txt`.
pub fn merge_split(src_dir: &Path, split: Split, out_dir: &Path) -> Result<SplitOutcome> {
    let files = discover_split_files(src_dir, split)?;
    if files.is_empty() {
        tracing::info!(split = %split, dir = %src_dir.display(), "no inputs for split");
        return Ok(SplitOutcome::NoInputs {
            split,
            dir: src_dir.to_path_buf(),
        });
    }

    let merged = merge_files(&files)?;
    let out_path = out_dir.join(format!("{split}.txt"));
    let lines = write_list(&out_path, &merged)?;
    tracing::info!(split = %split, sources = files.len(), lines, "merged split");

    Ok(SplitOutcome::Merged(MergeSummary {
        split,
        sources: files.len(),
        path: out_path,
        lines,
    }))
}

/// Runs `merge_split` for every split. `out_dir` defaults to `src_dir`.
pub fn merge_all(src_dir: &Path, out_dir: Option<&Path>) -> Result<Vec<SplitOutcome>> {
    let out_dir = out_dir.unwrap_or(src_dir);
    MERGE_SPLITS
        .into_iter()
        .map(|split| merge_split(src_dir, split, out_dir))
        .collect()
}
