// src/semantics/writer.rs

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::semantics::SemanticsError;

/// Writes `<dir>/<name>.txt` with one `word:name` line per distinct word,
/// sorted ascending. Returns the path written.
pub fn write_category(dir: &Path, name: &str, words: &[String]) -> Result<PathBuf, SemanticsError> {
    let path = dir.join(format!("{}.txt", name));
    let write_err = |source| SemanticsError::Write {
        path: path.clone(),
        source,
    };

    fs::create_dir_all(dir).map_err(write_err)?;
    let mut writer = BufWriter::new(File::create(&path).map_err(write_err)?);

    let sorted: BTreeSet<&str> = words.iter().map(String::as_str).collect();
    for word in &sorted {
        writeln!(writer, "{}:{}", word, name).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    info!("Wrote {} words to {}", sorted.len(), path.display());
    Ok(path)
}
