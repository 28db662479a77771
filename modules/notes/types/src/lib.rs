//! Shared types for the notes service and its HTTP clients.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =====================================================
// Request Types (query strings)
// =====================================================

/// Query for any endpoint that only needs the caller's token
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: Option<String>,
}

/// POST /note
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNoteQuery {
    pub text: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// PATCH /note/{id}
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateNoteQuery {
    pub new_text: String,
    #[serde(default)]
    pub token: Option<String>,
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteResponse {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteTextResponse {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInfoResponse {
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Note ids keyed by their zero-based position in the directory listing.
/// JSON object keys come out as strings (`{"0": 1, "1": 3}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteListResponse {
    pub notes: BTreeMap<usize, u64>,
}

/// Per-letter counts of a note's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountLettersResponse {
    pub counted_at: NaiveDateTime,
    pub counters: BTreeMap<String, u64>,
}

/// Body for deletions and every error status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Service health status
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
}
