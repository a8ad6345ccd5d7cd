//! Per-candidate append-only vote logs.
//!
//! Each candidate has one flat file, `<ident>.votes`, holding one
//! timestamp line per accepted vote. Files are created on first vote and
//! only ever grow.

use std::io;
use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Handle on the directory holding the vote log files.
#[derive(Debug, Clone)]
pub struct VoteLog {
    dir: PathBuf,
}

impl VoteLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        VoteLog { dir: dir.into() }
    }

    /// Path of the log file for `ident`. The identifier is already
    /// restricted to alphanumerics plus the separator, so it is safe to
    /// use as a file stem.
    pub fn path_for(&self, ident: &str) -> PathBuf {
        self.dir.join(format!("{ident}.votes"))
    }

    /// Appends one timestamp line to the candidate's log.
    ///
    /// The file is opened with append semantics (O_APPEND) and the whole
    /// line goes through a single write, so concurrent appends from
    /// parallel requests cannot interleave partial lines.
    pub async fn append(&self, ident: &str, timestamp: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.path_for(ident))
            .await?;
        file.write_all(format!("{timestamp}\n").as_bytes()).await?;
        Ok(())
    }
}
