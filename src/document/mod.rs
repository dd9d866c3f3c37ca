//! Saving and loading state machine definitions.
//!
//! A machine is stored together with a format version and the time it was
//! saved, as JSON for hand editing or as compact binary via bincode.

use crate::core::Fsm;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::DocumentError;

/// Version identifier for the document format
pub const DOCUMENT_VERSION: u32 = 1;

/// Serializable, versioned wrapper around an [`Fsm`].
///
/// # Example
///
/// ```rust
/// use fsm_table::core::{Fsm, State, Transition};
/// use fsm_table::document::FsmDocument;
///
/// let fsm = Fsm::new(
///     vec![State::new(0), State::new(1)],
///     vec![Transition::new(0, 1), Transition::new(1, 0)],
/// );
///
/// let json = FsmDocument::new(fsm.clone()).to_json().unwrap();
/// let loaded = FsmDocument::from_json(&json).unwrap();
/// assert_eq!(loaded.fsm, fsm);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FsmDocument {
    /// Document format version
    pub version: u32,

    /// When the document was created
    pub saved_at: DateTime<Utc>,

    /// The machine definition
    pub fsm: Fsm,
}

impl FsmDocument {
    /// Wrap a machine in a document of the current version.
    pub fn new(fsm: Fsm) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            saved_at: Utc::now(),
            fsm,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DocumentError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unknown versions.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: FsmDocument = serde_json::from_str(json)
            .map_err(|e| DocumentError::DeserializationFailed(e.to_string()))?;
        document.check_version()
    }

    /// Serialize to bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        bincode::serialize(self).map_err(|e| DocumentError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from bincode, rejecting unknown versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let document: FsmDocument = bincode::deserialize(bytes)
            .map_err(|e| DocumentError::DeserializationFailed(e.to_string()))?;
        document.check_version()
    }

    fn check_version(self) -> Result<Self, DocumentError> {
        if self.version != DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                found: self.version,
                supported: DOCUMENT_VERSION,
            });
        }
        Ok(self)
    }
}
