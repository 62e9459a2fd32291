use crate::error::{QueueError, Result};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Line-oriented text file backing a queue
///
/// A missing file is not an error: it reads as "no lines yet". Writes go
/// through a temporary file in the same directory which is then renamed over
/// the target, so an interrupted save leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct TextStore {
    file_path: PathBuf,
}

impl TextStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Sidecar file collecting lines that could not be loaded: `<store>.rejected`
    pub fn rejected_path(&self) -> PathBuf {
        let mut name = OsString::from(self.file_path.as_os_str());
        name.push(".rejected");
        PathBuf::from(name)
    }

    /// Read every line of the store as raw bytes
    ///
    /// Lines are not required to be UTF-8 here; decoding is left to the
    /// caller so a bad line can be reported on its own.
    ///
    /// # Returns
    /// `None` if the file does not exist, otherwise its lines with
    /// `\n` / `\r\n` terminators and a leading UTF-8 BOM stripped
    pub fn read_lines(&self) -> Result<Option<Vec<Vec<u8>>>> {
        let content = match fs::read(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "store does not exist yet");
                return Ok(None);
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        let lines = split_lines(&content);
        debug!(path = %self.file_path.display(), lines = lines.len(), "read store");
        Ok(Some(lines))
    }

    /// Atomically replace the store with the given lines, one per line
    pub fn write_lines<I, S>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut content = String::new();
        let mut count = 0usize;
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
            count += 1;
        }

        self.atomic_write(content.as_bytes())
            .map_err(|e| self.unavailable(e))?;
        debug!(path = %self.file_path.display(), lines = count, "wrote store");
        Ok(())
    }

    /// Append raw lines to [`TextStore::rejected_path`], byte for byte
    ///
    /// Appending keeps lines rejected by earlier runs.
    pub fn append_rejected(&self, lines: &[Vec<u8>]) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }

        let path = self.rejected_path();
        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
            for line in lines {
                file.write_all(line)?;
                file.write_all(b"\n")?;
            }
            file.sync_all()
        };
        write().map_err(|source| QueueError::StoreUnavailable {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), lines = lines.len(), "kept rejected records");
        Ok(())
    }

    fn atomic_write(&self, data: &[u8]) -> io::Result<()> {
        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        // Same directory keeps the final rename on one filesystem
        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(data)?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&self.file_path).map_err(|e| e.error)?;
        Ok(())
    }

    fn unavailable(&self, source: io::Error) -> QueueError {
        QueueError::StoreUnavailable {
            path: self.file_path.clone(),
            source,
        }
    }
}

fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    if content.is_empty() {
        return Vec::new();
    }

    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect()
}
