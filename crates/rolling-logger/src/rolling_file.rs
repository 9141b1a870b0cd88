//! Size-capped log file with a ring of recent lines.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Tuning knobs for [`RollingFile`]
#[derive(Debug, Clone, Copy)]
pub struct LoggerOptions {
    /// Rotate once the active file would grow past this many bytes
    pub max_bytes: u64,
    /// Number of recent lines kept in memory
    pub ring_capacity: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            max_bytes: 2 * 1024 * 1024,
            ring_capacity: 500,
        }
    }
}

/// `<dir>/<name>.log`, rotated to `<name>.log.1` when full
pub struct RollingFile {
    path: PathBuf,
    backup_path: PathBuf,
    file: File,
    written: u64,
    options: LoggerOptions,
    recent: VecDeque<String>,
    /// Bytes after the last newline, decoded once the line completes
    partial: Vec<u8>,
}

impl RollingFile {
    pub fn open(dir: &Path, app_name: &str, options: LoggerOptions) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let backup_path = dir.join(format!("{}.log.1", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            backup_path,
            file,
            written,
            options,
            recent: VecDeque::with_capacity(options.ring_capacity),
            partial: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Most recent complete lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.recent.iter().cloned().collect()
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        fs::rename(&self.path, &self.backup_path)?;
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn remember(&mut self, bytes: &[u8]) {
        if self.options.ring_capacity == 0 {
            return;
        }
        self.partial.extend_from_slice(bytes);
        while let Some(pos) = self.partial.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.partial.drain(..=pos).collect();
            if self.recent.len() == self.options.ring_capacity {
                self.recent.pop_front();
            }
            let text = String::from_utf8_lossy(&line);
            self.recent.push_back(text.trim_end_matches(['\n', '\r']).to_string());
        }
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // An empty file always takes the write, even an oversized one
        if self.written > 0 && self.written + buf.len() as u64 > self.options.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        self.remember(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
