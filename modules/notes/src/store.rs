//! NoteStore — one JSON document per note in a flat directory
//!
//! Notes live at `{notes_dir}/{id}.txt` as `{text, created_at, updated_at}`.
//! The directory is the only source of truth: nothing is cached in memory.
//! Ids come from a monotonic counter kept in `{notes_dir}/.last_id`, so a
//! deleted note's id is never handed out again.

use crate::error::{NoteError, NoteResult};
use chrono::{NaiveDateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const NOTE_EXTENSION: &str = ".txt";
const COUNTER_FILE: &str = ".last_id";

/// On-disk note document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub text: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

pub struct NoteStore {
    notes_dir: PathBuf,
    /// Serializes id allocation and every read-modify-write
    write_lock: Mutex<()>,
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Parse `{id}.txt` into its id; anything else is not a note
fn parse_note_filename(name: &str) -> Option<u64> {
    let stem = name.strip_suffix(NOTE_EXTENSION)?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // `01.txt` would list as 1 but never resolve back to `1.txt`
    if stem.len() > 1 && stem.starts_with('0') {
        return None;
    }
    stem.parse().ok()
}

/// Write via a sibling temp file and rename, so readers never see a partial document
fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(content)?;
    file.sync_all()?;
    drop(file);

    if let Err(e) = fs::rename(&tmp_path, path) {
        fs::remove_file(&tmp_path).ok();
        return Err(e);
    }
    Ok(())
}

impl NoteStore {
    /// Open a store rooted at `notes_dir`, creating the directory if needed
    pub fn new(notes_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let notes_dir = notes_dir.into();
        fs::create_dir_all(&notes_dir)?;
        Ok(Self {
            notes_dir,
            write_lock: Mutex::new(()),
        })
    }

    fn note_path(&self, id: u64) -> PathBuf {
        self.notes_dir.join(format!("{}{}", id, NOTE_EXTENSION))
    }

    fn write_record(&self, id: u64, record: &NoteRecord) -> NoteResult<()> {
        let json = serde_json::to_vec(record).map_err(|source| NoteError::Corrupt { id, source })?;
        write_atomic(&self.note_path(id), &json)?;
        Ok(())
    }

    fn read_last_id(&self) -> io::Result<u64> {
        match fs::read_to_string(self.notes_dir.join(COUNTER_FILE)) {
            Ok(s) => Ok(s.trim().parse().unwrap_or_else(|_| {
                log::warn!("[NOTES] Ignoring unreadable id counter {:?}", s.trim());
                0
            })),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// Next id above both the persisted counter and every id on disk.
    /// Caller must hold `write_lock`.
    fn allocate_id(&self) -> NoteResult<u64> {
        let last_issued = self.read_last_id()?;
        let max_existing = self.list()?.into_iter().max().unwrap_or(0);
        let id = last_issued
            .max(max_existing)
            .checked_add(1)
            .ok_or_else(|| io::Error::other("note id space exhausted"))?;
        write_atomic(&self.notes_dir.join(COUNTER_FILE), id.to_string().as_bytes())?;
        Ok(id)
    }

    /// Create a note and return its id
    pub fn create(&self, text: &str) -> NoteResult<u64> {
        let _guard = self.write_lock.lock();

        let id = self.allocate_id()?;
        let ts = now();
        let record = NoteRecord {
            text: text.to_string(),
            created_at: ts,
            updated_at: ts,
        };
        self.write_record(id, &record)?;
        Ok(id)
    }

    /// Load the full document for a note
    pub fn read(&self, id: u64) -> NoteResult<NoteRecord> {
        let content = match fs::read_to_string(self.note_path(id)) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(NoteError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content).map_err(|source| NoteError::Corrupt { id, source })
    }

    pub fn read_text(&self, id: u64) -> NoteResult<String> {
        Ok(self.read(id)?.text)
    }

    /// `(created_at, updated_at)` for a note
    pub fn read_info(&self, id: u64) -> NoteResult<(NaiveDateTime, NaiveDateTime)> {
        let record = self.read(id)?;
        Ok((record.created_at, record.updated_at))
    }

    /// Replace a note's text and bump `updated_at`; the whole document is rewritten
    pub fn update_text(&self, id: u64, new_text: &str) -> NoteResult<String> {
        let _guard = self.write_lock.lock();

        let mut record = self.read(id)?;
        record.text = new_text.to_string();
        // Never move backwards if the wall clock does
        record.updated_at = now().max(record.updated_at);
        self.write_record(id, &record)?;
        Ok(record.text)
    }

    pub fn delete(&self, id: u64) -> NoteResult<()> {
        let _guard = self.write_lock.lock();

        match fs::remove_file(self.note_path(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(NoteError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Ids of all notes, in directory listing order (not sorted)
    pub fn list(&self) -> NoteResult<Vec<u64>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.notes_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(id) = entry.file_name().to_str().and_then(parse_note_filename) {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
