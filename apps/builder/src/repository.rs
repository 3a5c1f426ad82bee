//! The single owner of persisted editor state.
//!
//! Three independent string keys: the document as JSON, the template as a
//! bare string, and the accent color as a CSS color string. Reads degrade to
//! defaults on bad data. Failed writes never abort the caller; they come back
//! as [`StorageWarning`]s next to the value the caller should keep using.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::document::normalize;
use crate::models::{AccentColor, ResumeDocument, TemplateId};
use crate::store::{KeyValueStore, StoreError, StoreResult};

pub const DOCUMENT_KEY: &str = "resumeBuilderData";
pub const TEMPLATE_KEY: &str = "resumeTemplate";
pub const ACCENT_KEY: &str = "resumeAccentColor";

/// A write that did not land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageWarning {
    pub key: String,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl StorageWarning {
    fn new(key: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// A value together with any write failures hit while producing it.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub value: T,
    pub warnings: Vec<StorageWarning>,
}

impl<T> Snapshot<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    fn warn(mut self, warning: Option<StorageWarning>) -> Self {
        self.warnings.extend(warning);
        self
    }
}

pub struct ResumeRepository {
    store: Arc<dyn KeyValueStore>,
    /// Serializes load-modify-save so one mutation finishes before the next starts.
    edit_lock: Mutex<()>,
}

impl ResumeRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        info!("Resume repository using {} store", store.backend());
        Self {
            store,
            edit_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock carries no broken state.
        self.edit_lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self, key: &str, value: &str) -> Option<StorageWarning> {
        match self.store.set(key, value) {
            Ok(()) => {
                debug!("Persisted {key} ({} bytes)", value.len());
                None
            }
            Err(e) => {
                warn!("Failed to persist {key}: {e}");
                Some(StorageWarning::new(key, e.to_string()))
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Document
    // ────────────────────────────────────────────────────────────────────────

    /// Loads the document, migrating legacy shapes.
    ///
    /// A missing key yields a blank seeded document. Unparseable JSON is
    /// logged and also yields a blank document; the stored bytes are left
    /// alone until the next save. A legacy document is written back in the
    /// current shape.
    pub fn load_document(&self) -> StoreResult<Snapshot<ResumeDocument>> {
        let _guard = self.lock();
        self.load_document_locked()
    }

    fn load_document_locked(&self) -> StoreResult<Snapshot<ResumeDocument>> {
        let Some(raw) = self.store.get(DOCUMENT_KEY)? else {
            return Ok(Snapshot::new(ResumeDocument::blank()));
        };

        let parsed = match serde_json::from_str::<Value>(&raw) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) => {
                warn!("Stored {DOCUMENT_KEY} is not a JSON object; starting from a blank document");
                return Ok(Snapshot::new(ResumeDocument::blank()));
            }
            Err(e) => {
                warn!("Stored {DOCUMENT_KEY} is not valid JSON ({e}); starting from a blank document");
                return Ok(Snapshot::new(ResumeDocument::blank()));
            }
        };

        let document = normalize(&parsed);
        let mut snapshot = Snapshot::new(document);
        match serde_json::to_value(&snapshot.value) {
            Ok(canonical) if canonical != parsed => {
                info!("Migrated stored {DOCUMENT_KEY} to the current shape");
                let warning = self.save_document_locked(&snapshot.value);
                snapshot = snapshot.warn(warning);
            }
            Ok(_) => {}
            Err(e) => warn!("Could not re-serialize {DOCUMENT_KEY}: {e}"),
        }
        Ok(snapshot)
    }

    fn save_document_locked(&self, doc: &ResumeDocument) -> Option<StorageWarning> {
        match serde_json::to_string(doc) {
            Ok(json) => self.write(DOCUMENT_KEY, &json),
            Err(e) => {
                warn!("Failed to serialize {DOCUMENT_KEY}: {e}");
                Some(StorageWarning::new(DOCUMENT_KEY, e.to_string()))
            }
        }
    }

    /// Load, transform and save as one step. The edited document is returned
    /// even when the save fails.
    pub fn update_document<E, F>(&self, edit: F) -> Result<Snapshot<ResumeDocument>, E>
    where
        E: From<StoreError>,
        F: FnOnce(&ResumeDocument) -> Result<ResumeDocument, E>,
    {
        let _guard = self.lock();
        let current = self.load_document_locked()?;
        let next = edit(&current.value)?;
        let warning = self.save_document_locked(&next);
        Ok(Snapshot {
            value: next,
            warnings: current.warnings,
        }
        .warn(warning))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Template and accent
    // ────────────────────────────────────────────────────────────────────────

    /// Unknown or missing values fall back to classic.
    pub fn load_template(&self) -> StoreResult<TemplateId> {
        match self.store.get(TEMPLATE_KEY)? {
            None => Ok(TemplateId::default()),
            Some(raw) => Ok(raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored {TEMPLATE_KEY}: {e}");
                TemplateId::default()
            })),
        }
    }

    pub fn save_template(&self, template: TemplateId) -> Option<StorageWarning> {
        let _guard = self.lock();
        self.write(TEMPLATE_KEY, template.as_str())
    }

    /// Missing or unusable values fall back to the default accent.
    pub fn load_accent(&self) -> StoreResult<AccentColor> {
        match self.store.get(ACCENT_KEY)? {
            None => Ok(AccentColor::default()),
            Some(raw) => Ok(AccentColor::parse(&raw).unwrap_or_else(|e| {
                warn!("Ignoring stored {ACCENT_KEY}: {e}");
                AccentColor::default()
            })),
        }
    }

    pub fn save_accent(&self, accent: &AccentColor) -> Option<StorageWarning> {
        let _guard = self.lock();
        self.write(ACCENT_KEY, accent.as_str())
    }
}
