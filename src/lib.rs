//! Helpers for preparing file lists from an image dataset.
//!
//! `collect` walks `<root>/<op>/<split>/` for the target images and writes one
//! `<op>_<split>.txt` list per pair; `merge` folds every `*_<split>.txt` in a
//! directory into a single deduplicated `<split>.txt`.

pub mod collect;
pub mod dataset;
pub mod error;
pub mod list_file;
pub mod logging;
pub mod merge;

pub use dataset::{Operation, Split, TARGET_NAMES};
pub use error::{ListError, Result};
