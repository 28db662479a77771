//! Token-checked note operations.
//!
//! Every call re-validates its token against the token file before the
//! note directory is touched.

use crate::error::{NoteError, NoteResult};
use crate::store::NoteStore;
use crate::tokens::TokenStore;
use chrono::{NaiveDateTime, Utc};
use std::collections::BTreeMap;

pub struct NoteService {
    tokens: TokenStore,
    store: NoteStore,
}

/// Count alphabetic characters, case-folded
pub fn count_letters(text: &str) -> BTreeMap<String, u64> {
    let mut counters = BTreeMap::new();
    for c in text.chars().filter(|c| c.is_alphabetic()) {
        for lower in c.to_lowercase() {
            *counters.entry(lower.to_string()).or_insert(0) += 1;
        }
    }
    counters
}

impl NoteService {
    pub fn new(tokens: TokenStore, store: NoteStore) -> Self {
        Self { tokens, store }
    }

    fn authorize(&self, token: Option<&str>) -> NoteResult<()> {
        match token {
            Some(t) if self.tokens.is_valid(t)? => Ok(()),
            Some(_) => {
                log::warn!("[NOTES] Rejected request with unknown token");
                Err(NoteError::Forbidden)
            }
            None => {
                log::warn!("[NOTES] Rejected request without token");
                Err(NoteError::Forbidden)
            }
        }
    }

    pub fn create(&self, token: Option<&str>, text: &str) -> NoteResult<u64> {
        self.authorize(token)?;
        let id = self.store.create(text)?;
        log::info!("[NOTES] Created note {}", id);
        Ok(id)
    }

    pub fn read_text(&self, token: Option<&str>, id: u64) -> NoteResult<String> {
        self.authorize(token)?;
        self.store.read_text(id)
    }

    pub fn read_info(
        &self,
        token: Option<&str>,
        id: u64,
    ) -> NoteResult<(NaiveDateTime, NaiveDateTime)> {
        self.authorize(token)?;
        self.store.read_info(id)
    }

    pub fn update_text(&self, token: Option<&str>, id: u64, new_text: &str) -> NoteResult<String> {
        self.authorize(token)?;
        let text = self.store.update_text(id, new_text)?;
        log::info!("[NOTES] Updated note {}", id);
        Ok(text)
    }

    pub fn delete(&self, token: Option<&str>, id: u64) -> NoteResult<()> {
        self.authorize(token)?;
        self.store.delete(id)?;
        log::info!("[NOTES] Deleted note {}", id);
        Ok(())
    }

    pub fn list(&self, token: Option<&str>) -> NoteResult<Vec<u64>> {
        self.authorize(token)?;
        self.store.list()
    }

    /// Letter frequencies of a note's current text
    pub fn count_letters(
        &self,
        token: Option<&str>,
        id: u64,
    ) -> NoteResult<(NaiveDateTime, BTreeMap<String, u64>)> {
        self.authorize(token)?;
        let text = self.store.read_text(id)?;
        Ok((Utc::now().naive_utc(), count_letters(&text)))
    }
}
