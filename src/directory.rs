// src/directory.rs
// =============================================================================
// Local storage layout.
//
// Downloaded documentation and the report live together in
//   <base>/<owner>/<repo>/
// The report is `output.txt` in that directory. It is opened in append mode
// and created if absent, so repeated runs accumulate lines.
// =============================================================================

use crate::error::{CheckError, Result};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

pub const REPORT_FILE: &str = "output.txt";

/// Directory that holds one repository's documentation and report.
pub fn report_dir(base: &Path, owner: &str, repo: &str) -> PathBuf {
    base.join(owner).join(repo)
}

/// Creates `path` and any missing parents. Existing directories are fine.
pub async fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .map_err(|source| CheckError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

/// Lists the entry names in `dir`, sorted so runs are reproducible.
///
/// Subdirectories and non-markdown files are included; filtering is the
/// parser's job.
pub async fn file_names(dir: &Path) -> Result<Vec<String>> {
    let read_dir_error = |source| CheckError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).await.map_err(read_dir_error)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_dir_error)? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Appends each record as one line to `<dir>/output.txt`.
///
/// Returns the path written to.
pub async fn append_report<I, S>(dir: &Path, lines: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = dir.join(REPORT_FILE);
    let write_error = |source| CheckError::Write {
        path: path.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await
        .map_err(write_error)?;

    let mut buffer = String::new();
    for line in lines {
        buffer.push_str(line.as_ref());
        buffer.push('\n');
    }
    file.write_all(buffer.as_bytes()).await.map_err(write_error)?;
    file.flush().await.map_err(write_error)?;

    Ok(path)
}
