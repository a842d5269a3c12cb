//! Path collection: find every target image below `<root>/<op>/<split>/` and
//! record its canonical path in `<outdir>/<op>_<split>.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::dataset::{is_target_name, Operation, Split};
use crate::error::{ListError, Result};
use crate::list_file::write_list;

/// One list file produced for an (operation, split) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSummary {
    pub operation: Operation,
    pub split: Split,
    pub path: PathBuf,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// The operation directory is absent; nothing was written.
    Skipped { dir: PathBuf },
    /// One summary per split, in `Split::ALL` order.
    Written(Vec<ListSummary>),
}

/// Returns the canonical paths of all target files under `split_dir`,
/// sorted by (parent directory, file name).
///
/// A missing split directory yields an empty list. Symlinked directories are
/// not descended into; a symlink pointing at a regular file is accepted.
pub fn find_target_images(split_dir: &Path) -> Result<Vec<PathBuf>> {
    if !split_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(split_dir).min_depth(1) {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_target_name(name) || !entry.path().is_file() {
            continue;
        }
        let resolved = fs::canonicalize(entry.path()).map_err(|e| ListError::io(entry.path(), e))?;
        tracing::debug!(path = %resolved.display(), "matched target image");
        paths.push(resolved);
    }

    paths.sort_by_cached_key(|p| sort_key(p));
    Ok(paths)
}

fn sort_key(path: &Path) -> (String, String) {
    let parent = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (parent, name)
}

/// Writes the lists for every split of `op`. Lists land in `outdir` when
/// given, otherwise inside the operation directory itself.
pub fn collect_operation(root: &Path, op: Operation, outdir: Option<&Path>) -> Result<OperationOutcome> {
    let op_dir = root.join(op.as_str());
    if !op_dir.is_dir() {
        tracing::info!(operation = %op, dir = %op_dir.display(), "operation directory not found");
        return Ok(OperationOutcome::Skipped { dir: op_dir });
    }

    let target_outdir = outdir.unwrap_or(op_dir.as_path());
    let mut summaries = Vec::with_capacity(Split::ALL.len());
    for split in Split::ALL {
        let paths = find_target_images(&op_dir.join(split.as_str()))?;
        let outfile = target_outdir.join(format!("{op}_{split}.txt"));
        let lines = paths
            .iter()
            .map(|p| p.to_str().ok_or_else(|| ListError::NonUtf8Path(p.clone())))
            .collect::<Result<Vec<_>>>()?;
        let count = write_list(&outfile, lines)?;
        tracing::info!(operation = %op, split = %split, count, "collected target images");
        summaries.push(ListSummary {
            operation: op,
            split,
            path: outfile,
            count,
        });
    }
    Ok(OperationOutcome::Written(summaries))
}

/// Runs `collect_operation` for every operation, in `Operation::ALL` order.
pub fn collect_all(root: &Path, outdir: Option<&Path>) -> Result<Vec<OperationOutcome>> {
    Operation::ALL
        .into_iter()
        .map(|op| collect_operation(root, op, outdir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn finds_only_target_names_at_any_depth() {
        let dir = tempdir().unwrap();
        let split = dir.path().join("train");
        touch(&split.join("a/1.png"));
        touch(&split.join("a/b/c/2.png"));
        touch(&split.join("a/3.png"));
        touch(&split.join("a/1.PNG"));
        touch(&split.join("a/1.png.bak"));
        fs::create_dir_all(split.join("d/1.png")).unwrap();

        let found = find_target_images(&split).unwrap();
        let root = fs::canonicalize(&split).unwrap();

        assert_eq!(found, vec![root.join("a/1.png"), root.join("a/b/c/2.png")]);
    }

    #[test]
    fn sorts_by_parent_then_name() {
        let dir = tempdir().unwrap();
        let split = dir.path().join("train");
        touch(&split.join("b/1.png"));
        touch(&split.join("a/2.png"));
        touch(&split.join("a/1.png"));
        touch(&split.join("a-z/1.png"));

        let found = find_target_images(&split).unwrap();
        let root = fs::canonicalize(&split).unwrap();

        // Comparing whole strings would put a-z/1.png before a/1.png.
        assert_eq!(
            found,
            vec![
                root.join("a/1.png"),
                root.join("a/2.png"),
                root.join("a-z/1.png"),
                root.join("b/1.png"),
            ]
        );
    }

    #[test]
    fn missing_split_dir_is_empty() {
        let dir = tempdir().unwrap();
        assert!(find_target_images(&dir.path().join("val")).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_recorded_by_target() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("store/real.png");
        touch(&real);
        let split = dir.path().join("train");
        fs::create_dir_all(split.join("a")).unwrap();
        std::os::unix::fs::symlink(&real, split.join("a/1.png")).unwrap();

        let found = find_target_images(&split).unwrap();

        assert_eq!(found, vec![fs::canonicalize(&real).unwrap()]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_directory_aborts_the_list() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let odd = dir.path().join("remove/train").join(OsStr::from_bytes(b"bad\xff"));
        touch(&odd.join("1.png"));

        let err = collect_operation(dir.path(), Operation::Remove, None).unwrap_err();

        assert!(matches!(err, ListError::NonUtf8Path(ref p) if p.ends_with("1.png")));
        assert!(!dir.path().join("remove/remove_train.txt").exists());
    }

    #[test]
    fn missing_operation_is_skipped_without_output() {
        let dir = tempdir().unwrap();

        let outcome = collect_operation(dir.path(), Operation::Rotate, None).unwrap();

        assert_eq!(
            outcome,
            OperationOutcome::Skipped {
                dir: dir.path().join("rotate")
            }
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_every_split_next_to_operation_by_default() {
        let dir = tempdir().unwrap();
        let op_dir = dir.path().join("remove");
        touch(&op_dir.join("train/a/1.png"));
        touch(&op_dir.join("train/b/1.png"));
        fs::create_dir_all(op_dir.join("test")).unwrap();

        let outcome = collect_operation(dir.path(), Operation::Remove, None).unwrap();

        let OperationOutcome::Written(summaries) = outcome else {
            panic!("expected lists to be written");
        };
        let counts: Vec<_> = summaries.iter().map(|s| (s.split, s.count)).collect();
        assert_eq!(counts, vec![(Split::Train, 2), (Split::Test, 0), (Split::Val, 0)]);

        let canon = fs::canonicalize(&op_dir).unwrap();
        let train = fs::read_to_string(op_dir.join("remove_train.txt")).unwrap();
        assert_eq!(
            train,
            format!(
                "{}\n{}\n",
                canon.join("train/a/1.png").display(),
                canon.join("train/b/1.png").display()
            )
        );
        assert_eq!(fs::read_to_string(op_dir.join("remove_test.txt")).unwrap(), "");
        assert_eq!(fs::read_to_string(op_dir.join("remove_val.txt")).unwrap(), "");
    }

    #[test]
    fn explicit_outdir_is_created_and_shared() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("remove/train/x/2.png"));
        touch(&dir.path().join("translate/val/y/1.png"));
        let out = dir.path().join("lists/out");

        let outcomes = collect_all(dir.path(), Some(&out)).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[2], OperationOutcome::Skipped { .. }));
        let mut names: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "remove_test.txt",
                "remove_train.txt",
                "remove_val.txt",
                "translate_test.txt",
                "translate_train.txt",
                "translate_val.txt",
            ]
        );
        assert!(!dir.path().join("remove/remove_train.txt").exists());
    }

    #[test]
    fn rerun_is_byte_identical() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("rotate/test/q/1.png"));
        touch(&dir.path().join("rotate/test/p/2.png"));
        touch(&dir.path().join("rotate/test/p/1.png"));
        let out = dir.path().join("rotate/rotate_test.txt");

        collect_all(dir.path(), None).unwrap();
        let first = fs::read(&out).unwrap();
        collect_all(dir.path(), None).unwrap();

        assert_eq!(fs::read(&out).unwrap(), first);
    }
}
