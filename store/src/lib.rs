//! # Note Store
//!
//! Insertion-ordered in-memory collection of notes, shared across request
//! handlers behind an async `RwLock`. Constructed once at process start and
//! injected into the HTTP layer; nothing is persisted across restarts.

use errors::NoteError;
use notes_core::Note;
use tokio::sync::RwLock;
use tracing::debug;

/// Ordered collection of notes with unique ids.
///
/// All mutation goes through the write lock; summarization reads a single
/// consistent snapshot via [`NoteStore::combined_content`], so concurrent
/// adds and deletes can never produce a torn read.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: RwLock<Vec<Note>>
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new note with a freshly generated id and returns it.
    pub async fn add(&self, content: impl Into<String>) -> Note {
        let note = Note::new(content);
        let mut notes = self.notes.write().await;
        notes.push(note.clone());
        debug!(id = %note.id, total = notes.len(), "note added");
        note
    }

    /// Returns the page of notes at offset `(page - 1) * limit`, in
    /// insertion order.
    ///
    /// Out-of-range combinations (`page == 0`, offset past the end) yield an
    /// empty vec rather than an error; the arithmetic saturates so no input
    /// can overflow.
    pub async fn list(&self, page: usize, limit: usize) -> Vec<Note> {
        if page == 0 {
            return Vec::new();
        }
        let notes = self.notes.read().await;
        let start = (page - 1).saturating_mul(limit);
        notes.iter().skip(start).take(limit).cloned().collect()
    }

    /// Removes the note with the given id in place; `retain` keeps
    /// insertion order and id uniqueness intact.
    pub async fn delete(&self, id: &str) -> Result<(), NoteError> {
        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(NoteError::NotFound { id: id.to_string() });
        }
        debug!(id = %id, total = notes.len(), "note deleted");
        Ok(())
    }

    /// All note contents joined with newlines, in insertion order, read
    /// under a single lock acquisition.
    pub async fn combined_content(&self) -> String {
        let notes = self.notes.read().await;
        notes
            .iter()
            .map(|n| n.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }
}
