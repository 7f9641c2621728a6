//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to `<dir>/<app>.log`,
//! rotating to `<app>.log.1 .. <app>.log.N` once the file grows past a size
//! limit, and keeps the most recent lines in a circular buffer so they can
//! be shown without reading the file back. Records emitted through the
//! `log` facade are forwarded to the same subscriber.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Rotate once the active file reaches this size
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Number of rotated files kept beside the active one
pub const DEFAULT_MAX_FILES: usize = 5;
/// Lines kept in memory
pub const DEFAULT_RING_CAPACITY: usize = 500;

static RING: OnceLock<Arc<Mutex<VecDeque<String>>>> = OnceLock::new();

/// Active log file plus rotation bookkeeping
pub struct RollingFile {
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
    max_files: usize,
    ring: Arc<Mutex<VecDeque<String>>>,
    ring_capacity: usize,
}

impl RollingFile {
    pub fn open(
        dir: &Path,
        app_name: &str,
        max_bytes: u64,
        max_files: usize,
        ring_capacity: usize,
    ) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", app_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            file,
            written,
            max_bytes,
            max_files,
            ring: Arc::new(Mutex::new(VecDeque::with_capacity(ring_capacity))),
            ring_capacity,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared handle on the in-memory line buffer
    pub fn ring(&self) -> Arc<Mutex<VecDeque<String>>> {
        self.ring.clone()
    }

    fn rotated_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", n));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            self.file = File::create(&self.path)?;
            self.written = 0;
            return Ok(());
        }

        let oldest = self.rotated_path(self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.max_files).rev() {
            let from = self.rotated_path(n);
            if from.exists() {
                fs::rename(&from, self.rotated_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.rotated_path(1))?;

        self.file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        self.written = 0;
        Ok(())
    }

    fn remember(&self, buf: &[u8]) {
        let Ok(mut ring) = self.ring.lock() else {
            return;
        };
        for line in String::from_utf8_lossy(buf).lines() {
            if line.is_empty() {
                continue;
            }
            if ring.len() == self.ring_capacity {
                ring.pop_front();
            }
            ring.push_back(line.to_string());
        }
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
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

/// `MakeWriter` handing out locked access to the shared file
#[derive(Clone)]
struct SharedRollingFile(Arc<Mutex<RollingFile>>);

struct RollingGuard<'a>(Option<MutexGuard<'a, RollingFile>>);

impl Write for RollingGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            // Poisoned lock: drop the record rather than panic inside logging.
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedRollingFile {
    type Writer = RollingGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RollingGuard(self.0.lock().ok())
    }
}

struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber writing under `log_dir`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), String> {
    let file = RollingFile::open(
        log_dir.as_ref(),
        app_name,
        DEFAULT_MAX_BYTES,
        DEFAULT_MAX_FILES,
        DEFAULT_RING_CAPACITY,
    )
    .map_err(|e| format!("Failed to open log file: {}", e))?;

    let ring = file.ring();
    let writer = SharedRollingFile(Arc::new(Mutex::new(file)));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_timer(LocalTime)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    let _ = RING.set(ring);
    tracing::info!(app = app_name, "logger initialized");
    Ok(())
}

/// Most recent lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    RING.get()
        .and_then(|ring| ring.lock().ok().map(|r| r.iter().cloned().collect()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_kept_in_ring() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "Test", DEFAULT_MAX_BYTES, 2, 2).unwrap();

        file.write_all(b"one\n").unwrap();
        file.write_all(b"two\n").unwrap();
        file.write_all(b"three\n").unwrap();

        let ring = file.ring();
        let lines: Vec<String> = ring.lock().unwrap().iter().cloned().collect();
        assert_eq!(lines, vec!["two".to_string(), "three".to_string()]);
    }

    #[test]
    fn test_rotation_keeps_bounded_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RollingFile::open(dir.path(), "Test", 10, 2, 10).unwrap();

        for line in ["aaaaaaaa\n", "bbbbbbbb\n", "cccccccc\n", "dddddddd\n"] {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();

        let active = fs::read_to_string(dir.path().join("Test.log")).unwrap();
        let first = fs::read_to_string(dir.path().join("Test.log.1")).unwrap();
        let second = fs::read_to_string(dir.path().join("Test.log.2")).unwrap();
        assert_eq!(active, "dddddddd\n");
        assert_eq!(first, "cccccccc\n");
        assert_eq!(second, "bbbbbbbb\n");
        assert!(!dir.path().join("Test.log.3").exists());
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut file = RollingFile::open(dir.path(), "Test", DEFAULT_MAX_BYTES, 1, 4).unwrap();
            file.write_all(b"first\n").unwrap();
        }
        let mut file = RollingFile::open(dir.path(), "Test", DEFAULT_MAX_BYTES, 1, 4).unwrap();
        file.write_all(b"second\n").unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}
