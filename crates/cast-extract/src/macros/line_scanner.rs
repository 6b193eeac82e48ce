//! Forward-only line reader over a file on disk.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Reads lines by 1-based number, moving forward through the file.
///
/// Asking for a line before the current position reopens the file.
pub(crate) struct LineScanner {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    /// Number of the last line read; zero before the first read.
    current: usize,
}

impl LineScanner {
    pub(crate) fn open(path: &Path) -> io::Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(File::open(path)?).lines(),
            current: 0,
        })
    }

    /// The text of line `number`, or `None` past the end of the file.
    pub(crate) fn line(&mut self, number: usize) -> io::Result<Option<String>> {
        if number == 0 {
            return Ok(None);
        }
        if number <= self.current {
            *self = Self::open(&self.path)?;
        }

        while self.current < number {
            let Some(line) = self.lines.next().transpose()? else {
                return Ok(None);
            };
            self.current += 1;
            if self.current == number {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }
}
