//! Plain-text path lists: UTF-8, one entry per line, `\n` terminated.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ListError, Result};

/// Writes `entries` to `outfile`, replacing any existing file and creating
/// missing parent directories. Returns the number of entries written.
pub fn write_list<I, S>(outfile: &Path, entries: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(parent) = outfile.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ListError::io(parent, e))?;
    }

    let file = File::create(outfile).map_err(|e| ListError::io(outfile, e))?;
    let mut writer = BufWriter::new(file);
    let mut count = 0;
    for entry in entries {
        writeln!(writer, "{}", entry.as_ref()).map_err(|e| ListError::io(outfile, e))?;
        count += 1;
    }
    writer.flush().map_err(|e| ListError::io(outfile, e))?;

    tracing::debug!(path = %outfile.display(), count, "wrote list");
    Ok(count)
}

/// Reads the meaningful entries of a list file: each line trimmed, blank
/// lines and `#` comments dropped. `\n`, `\r\n` and a bare `\r` all end a line.
pub fn read_entries(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| ListError::io(path, e))?;

    let entries = text
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && !entry.starts_with('#'))
        .map(str::to_string)
        .collect();
    Ok(entries)
}
