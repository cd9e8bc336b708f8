//! Form repository
//!
//! Holds one category of form definitions, persisted under a single storage
//! key as an ordered JSON array. The in-memory collection is a point-in-time
//! snapshot: it is refreshed by [`FormRepository::reload`], never watched.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use portal_common::{FormDefinition, FormError, FormId};
use serde::Deserialize;
use serde_json::Value;

use crate::storage::{Storage, StorageError};

/// Errors from mutating a form repository
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("invalid form definition ({0})")]
    Invalid(#[from] FormError),

    #[error("failed to serialize forms: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A persisted collection of form definitions
pub struct FormRepository {
    storage: Arc<dyn Storage>,
    key: &'static str,
    forms: Vec<FormDefinition>,
    /// Stored records that do not decode, written back untouched
    undecoded: Vec<Value>,
}

/// Decoded contents of the storage key
#[derive(Default)]
struct Snapshot {
    forms: Vec<FormDefinition>,
    undecoded: Vec<Value>,
}

impl FormRepository {
    /// Open the repository stored under `key` and load its current contents
    pub fn open(storage: Arc<dyn Storage>, key: &'static str) -> Self {
        let mut repository = Self {
            storage,
            key,
            forms: Vec::new(),
            undecoded: Vec::new(),
        };
        repository.reload();
        repository
    }

    /// Current in-memory snapshot, in insertion order
    pub fn forms(&self) -> &[FormDefinition] {
        &self.forms
    }

    pub fn get(&self, id: FormId) -> Option<&FormDefinition> {
        self.forms.iter().find(|f| f.id == Some(id))
    }

    /// Read the persisted collection
    ///
    /// Never fails: an absent key, an unreadable store or a malformed array
    /// all yield an empty collection. A single record that does not decode is
    /// left out of the result but kept in storage. A record whose id is missing
    /// or already taken is assigned a new one, which is written back so it
    /// stays the same on the next load.
    pub fn load(&self) -> Vec<FormDefinition> {
        self.read_snapshot().forms
    }

    /// Replace the in-memory snapshot with the persisted collection
    pub fn reload(&mut self) {
        let snapshot = self.read_snapshot();
        self.forms = snapshot.forms;
        self.undecoded = snapshot.undecoded;
        tracing::debug!(key = self.key, count = self.forms.len(), "Forms reloaded");
    }

    /// Insert or replace a definition and persist the whole collection
    ///
    /// A definition without an id gets a new one and is appended. A definition
    /// whose id is already present replaces that record in place, unless the
    /// id belongs to a stored record that does not decode; then it gets a new
    /// id instead. The
    /// in-memory collection changes only once the write has succeeded.
    ///
    /// Returns the id of the stored record.
    pub fn insert(&mut self, mut def: FormDefinition) -> Result<FormId, RepositoryError> {
        def.validate()?;

        let mut next = self.forms.clone();
        let id = match def.id {
            Some(id) if !used_ids(&[], &self.undecoded).contains(&id.0) => id,
            Some(taken) => {
                let id = next_id(&used_ids(&next, &self.undecoded));
                tracing::warn!(key = self.key, %taken, %id, "Id held by an undecoded form, assigning a new one");
                id
            }
            None => next_id(&used_ids(&next, &self.undecoded)),
        };
        def.id = Some(id);

        match next.iter_mut().find(|f| f.id == Some(id)) {
            Some(existing) => *existing = def,
            None => next.push(def),
        }

        self.persist(&next, &self.undecoded)?;
        self.forms = next;
        tracing::info!(key = self.key, %id, "Form saved");
        Ok(id)
    }

    /// Remove the definition with `id` and persist the whole collection
    ///
    /// Returns `false` without writing anything when no such record exists,
    /// so repeating the call has no further effect.
    pub fn delete_by_id(&mut self, id: FormId) -> Result<bool, RepositoryError> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let next: Vec<FormDefinition> = self
            .forms
            .iter()
            .filter(|f| f.id != Some(id))
            .cloned()
            .collect();

        self.persist(&next, &self.undecoded)?;
        self.forms = next;
        tracing::info!(key = self.key, %id, "Form deleted");
        Ok(true)
    }

    fn read_snapshot(&self) -> Snapshot {
        let raw = match self.storage.read(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = self.key, "No stored forms");
                return Snapshot::default();
            }
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "Form storage unreadable, using empty collection");
                return Snapshot::default();
            }
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = self.key, error = %e, "Stored forms are malformed, using empty collection");
                return Snapshot::default();
            }
        };

        let mut decoded = Vec::with_capacity(records.len());
        let mut undecoded = Vec::new();
        for record in records {
            match FormDefinition::deserialize(&record) {
                Ok(form) => decoded.push(form),
                Err(e) => {
                    tracing::warn!(key = self.key, error = %e, "Skipping stored form that does not decode");
                    undecoded.push(record);
                }
            }
        }

        let (forms, repaired) = self.normalize(decoded, &undecoded);
        if repaired && let Err(e) = self.persist(&forms, &undecoded) {
            tracing::warn!(key = self.key, error = %e, "Could not write back normalized forms");
        }

        Snapshot { forms, undecoded }
    }

    /// Decoded records go first, undecoded ones after them as they were read
    fn persist(&self, forms: &[FormDefinition], undecoded: &[Value]) -> Result<(), RepositoryError> {
        let mut records = forms
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        records.extend(undecoded.iter().cloned());

        let json = serde_json::to_string(&records)?;
        self.storage.write(self.key, &json)?;
        Ok(())
    }

    /// Returns the cleaned collection and whether anything changed
    fn normalize(
        &self,
        forms: Vec<FormDefinition>,
        undecoded: &[Value],
    ) -> (Vec<FormDefinition>, bool) {
        let mut used = used_ids(&forms, undecoded);
        let mut seen: HashSet<FormId> =
            used_ids(&[], undecoded).into_iter().map(FormId).collect();
        let mut repaired = false;
        let mut result = Vec::with_capacity(forms.len());

        for mut form in forms {
            let current = form.id;
            match current {
                Some(id) if seen.insert(id) => result.push(form),
                previous => {
                    let id = following_id(&used);
                    used.insert(id.0);
                    seen.insert(id);
                    match previous {
                        Some(duplicate) => {
                            tracing::warn!(key = self.key, %duplicate, %id, "Renumbered stored form with duplicate id");
                        }
                        None => {
                            tracing::warn!(key = self.key, %id, "Assigned id to stored form without one");
                        }
                    }
                    form.id = Some(id);
                    result.push(form);
                    repaired = true;
                }
            }
        }

        (result, repaired)
    }
}

/// Ids taken by decoded records and by undecoded records that carry one
fn used_ids(forms: &[FormDefinition], undecoded: &[Value]) -> BTreeSet<u64> {
    forms
        .iter()
        .filter_map(|f| f.id)
        .map(|id| id.0)
        .chain(undecoded.iter().filter_map(|r| r.get("id").and_then(Value::as_u64)))
        .collect()
}

/// One past the largest id in use
///
/// Once `u64::MAX` is taken this falls back to the smallest free id.
fn following_id(used: &BTreeSet<u64>) -> FormId {
    match used.last() {
        None => FormId(1),
        Some(&max) => match max.checked_add(1) {
            Some(id) => FormId(id),
            None => FormId((0..=u64::MAX).find(|id| !used.contains(id)).unwrap_or(0)),
        },
    }
}

/// Next id for a new record: the current time in milliseconds, bumped past
/// the largest id already in use
fn next_id(used: &BTreeSet<u64>) -> FormId {
    let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
    match used.last() {
        Some(&max) if max >= now => following_id(used),
        _ => FormId(now),
    }
}
