//! Audit Recorder
//!
//! Append-only JSONL writer for audit events. Thread-safe and
//! crash-resistant: every record is flushed, files rotate on size, and
//! the API has no update or delete — the append-only invariant lives
//! here, at the boundary.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, Timelike, Utc};
use parking_lot::Mutex;

use super::event::AuditEvent;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Maximum file size before rotation (10 MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Log file extension
const LOG_EXT: &str = ".jsonl";

// ============================================================================
// RECORDER
// ============================================================================

struct Inner {
    writer: BufWriter<File>,
    current_file: PathBuf,
    current_size: u64,
    base_dir: PathBuf,
    events_recorded: u64,
}

/// Append-only JSONL recorder. Shareable across threads; concurrent
/// appends serialize on an internal lock.
pub struct AuditRecorder {
    inner: Mutex<Inner>,
}

impl AuditRecorder {
    /// Create a recorder writing into the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        let (current_file, file) = open_new_file(&base_dir)?;

        Ok(Self {
            inner: Mutex::new(Inner {
                writer: BufWriter::new(file),
                current_file,
                current_size: 0,
                base_dir,
                events_recorded: 0,
            }),
        })
    }

    /// Append one event. Flushed before returning.
    pub fn record(&self, event: &AuditEvent) -> std::io::Result<()> {
        let mut inner = self.inner.lock();

        let line = event.to_jsonl();
        let bytes = line.as_bytes();

        if inner.current_size + bytes.len() as u64 > MAX_FILE_SIZE {
            rotate(&mut inner)?;
        }

        inner.writer.write_all(bytes)?;
        inner.writer.write_all(b"\n")?;
        inner.current_size += bytes.len() as u64 + 1;
        inner.writer.flush()?;
        inner.events_recorded += 1;
        Ok(())
    }

    /// Path of the file currently being written.
    pub fn current_file(&self) -> PathBuf {
        self.inner.lock().current_file.clone()
    }

    /// Events appended through this recorder instance.
    pub fn events_recorded(&self) -> u64 {
        self.inner.lock().events_recorded
    }
}

fn open_new_file(base_dir: &Path) -> std::io::Result<(PathBuf, File)> {
    let now = Utc::now();
    let filename = format!(
        "audit_{}_{:02}_{:02}_{:02}{:02}{:02}{}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        LOG_EXT
    );
    let file_path = base_dir.join(&filename);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file_path)?;

    log::info!("Opened audit log: {:?}", file_path);
    Ok((file_path, file))
}

fn rotate(inner: &mut Inner) -> std::io::Result<()> {
    inner.writer.flush()?;

    let (new_path, new_file) = open_new_file(&inner.base_dir)?;
    inner.writer = BufWriter::new(new_file);

    log::info!("Rotated audit log from {:?} to {:?}", inner.current_file, new_path);
    inner.current_file = new_path;
    inner.current_size = 0;
    Ok(())
}

// ============================================================================
// QUERY API (for reading logs back)
// ============================================================================

/// Read every event out of one audit log file. Lines that no longer
/// decode are skipped rather than poisoning the whole read.
pub fn read_events(file_path: &Path) -> std::io::Result<Vec<AuditEvent>> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);

    let mut events = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match serde_json::from_str::<AuditEvent>(&line) {
            Ok(event) => events.push(event),
            Err(e) => log::warn!("Skipping undecodable audit line: {}", e),
        }
    }
    Ok(events)
}

// ============================================================================
// TESTS
// ============================================================================
