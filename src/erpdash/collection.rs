//! Ordered, id-keyed record containers.
//!
//! A [`Collection`] is a `Vec` in insertion order with the three mutations the
//! store offers: append (or prepend), shallow-merge update by id, and delete by
//! id. Lookups are linear scans; collections hold tens of records, not millions.
//!
//! Ids are never checked for uniqueness. When duplicates exist, `update` and
//! `delete` act on every match, which is how a filter/map over the list behaves.
//!
//! [`AnyCollection`] erases the record type so callers holding only a
//! [`CollectionKind`] (the CLI, mostly) can work with JSON values.

use crate::error::{ErpError, Result};
use crate::state::{CollectionKind, Collections};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record stored in one of the state's collections.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const KIND: CollectionKind;

    fn id(&self) -> &str;

    fn collection(data: &Collections) -> &Collection<Self>;

    fn collection_mut(data: &mut Collections) -> &mut Collection<Self>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Record> Collection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn add(&mut self, record: T) {
        self.items.push(record);
    }

    /// Newest-first collections (notifications, audit logs) grow at the front.
    pub fn prepend(&mut self, record: T) {
        self.items.insert(0, record);
    }

    /// Shallow-merges `patch` into every record with `id`.
    ///
    /// Returns `Ok(false)` when no record matched or the merge left every match
    /// as it was. The `id` key of the patch is ignored. If the merged value no
    /// longer deserializes into `T`, or the patch names a field `T` does not
    /// have, the collection is left untouched and an [`ErpError::InvalidPatch`]
    /// is returned.
    pub fn update(&mut self, id: &str, patch: &Value) -> Result<bool> {
        let fields = patch_fields::<T>(id, patch)?;
        let mut merged = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            if item.id() == id {
                if let Some(record) = merge_fields(item, id, fields)? {
                    merged.push((index, record));
                }
            }
        }
        let touched = !merged.is_empty();
        for (index, record) in merged {
            self.items[index] = record;
        }
        Ok(touched)
    }

    /// Typed update: applies `f` to every record with `id`.
    pub fn update_with(&mut self, id: &str, mut f: impl FnMut(&mut T)) -> bool {
        let mut touched = false;
        for item in self.items.iter_mut().filter(|item| item.id() == id) {
            f(item);
            touched = true;
        }
        touched
    }

    /// Applies `f` to every record, returning how many it reported as changed.
    pub fn update_all(&mut self, mut f: impl FnMut(&mut T) -> bool) -> usize {
        self.items.iter_mut().map(|item| f(item)).filter(|changed| *changed).count()
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn patch_fields<'p, T: Record>(id: &str, patch: &'p Value) -> Result<&'p Map<String, Value>> {
    patch.as_object().ok_or_else(|| ErpError::InvalidPatch {
        kind: T::KIND,
        id: id.to_string(),
        reason: "patch must be a JSON object".to_string(),
    })
}

/// Merges `fields` into `record`. Returns `None` when the result equals the
/// record as it was.
fn merge_fields<T: Record>(
    record: &T,
    id: &str,
    fields: &Map<String, Value>,
) -> Result<Option<T>> {
    let invalid = |reason: String| ErpError::InvalidPatch {
        kind: T::KIND,
        id: id.to_string(),
        reason,
    };

    let original = serde_json::to_value(record)?;
    let mut value = original.clone();
    if let Value::Object(target) = &mut value {
        for (key, field) in fields.iter().filter(|(key, _)| key.as_str() != "id") {
            target.insert(key.clone(), field.clone());
        }
    }
    let merged: T = serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
    let merged_value = serde_json::to_value(&merged)?;

    // A key that does not survive the round trip is not a field of T. Nulls
    // are exempt: optional fields set to null are skipped on output.
    let unknown: Vec<&str> = fields
        .iter()
        .filter(|(key, field)| !field.is_null() && merged_value.get(key.as_str()).is_none())
        .map(|(key, _)| key.as_str())
        .collect();
    if !unknown.is_empty() {
        return Err(invalid(format!("unknown field(s): {}", unknown.join(", "))));
    }

    Ok((merged_value != original).then_some(merged))
}

/// Type-erased view of a collection, addressed with JSON values.
pub trait AnyCollection {
    fn kind(&self) -> CollectionKind;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ids(&self) -> Vec<String>;

    fn to_values(&self) -> Result<Vec<Value>>;

    fn get_value(&self, id: &str) -> Result<Option<Value>>;

    /// Deserializes `value` into the record type and appends it, returning its id.
    fn add_value(&mut self, value: Value) -> Result<String>;

    fn prepend_value(&mut self, value: Value) -> Result<String>;

    fn update_value(&mut self, id: &str, patch: &Value) -> Result<bool>;

    fn delete_id(&mut self, id: &str) -> bool;
}

impl<T: Record> AnyCollection for Collection<T> {
    fn kind(&self) -> CollectionKind {
        T::KIND
    }

    fn len(&self) -> usize {
        Collection::len(self)
    }

    fn ids(&self) -> Vec<String> {
        self.iter().map(|item| item.id().to_string()).collect()
    }

    fn to_values(&self) -> Result<Vec<Value>> {
        self.iter()
            .map(|item| serde_json::to_value(item).map_err(ErpError::from))
            .collect()
    }

    fn get_value(&self, id: &str) -> Result<Option<Value>> {
        match self.get(id) {
            Some(item) => Ok(Some(serde_json::to_value(item)?)),
            None => Ok(None),
        }
    }

    fn add_value(&mut self, value: Value) -> Result<String> {
        let record: T = serde_json::from_value(value)?;
        let id = record.id().to_string();
        self.add(record);
        Ok(id)
    }

    fn prepend_value(&mut self, value: Value) -> Result<String> {
        let record: T = serde_json::from_value(value)?;
        let id = record.id().to_string();
        self.prepend(record);
        Ok(id)
    }

    fn update_value(&mut self, id: &str, patch: &Value) -> Result<bool> {
        self.update(id, patch)
    }

    fn delete_id(&mut self, id: &str) -> bool {
        self.delete(id)
    }
}
