use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-submitted text record with a unique identifier.
///
/// The id is assigned once at creation and never changes; the store is the
/// only component that constructs notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into()
        }
    }
}
