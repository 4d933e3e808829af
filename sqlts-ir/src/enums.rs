//! Enum type registry.

use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeSeq};
use thiserror::Error;

use crate::QualifiedName;

/// Stable handle into an [`EnumCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EnumHandle(usize);

impl EnumHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Two registrations of the same enum identity disagree on labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "enum '{identity}' registered with labels [{}] but already has [{}]",
    .incoming.join(", "),
    .existing.join(", ")
)]
pub struct EnumConflict {
    pub identity: QualifiedName,
    pub existing: Vec<String>,
    pub incoming: Vec<String>,
}

/// Deduplicating registry of enum types discovered during introspection.
///
/// Iteration order is first-registration order. Labels keep catalog
/// declaration order and are never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumCollection {
    entries: IndexMap<QualifiedName, Vec<String>>,
}

impl EnumCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enum, returning its handle.
    ///
    /// Re-registering an identity with identical labels returns the existing
    /// handle. Differing labels are an [`EnumConflict`].
    pub fn register(
        &mut self,
        identity: QualifiedName,
        labels: Vec<String>,
    ) -> Result<EnumHandle, EnumConflict> {
        if let Some((index, _, existing)) = self.entries.get_full(&identity) {
            if existing != &labels {
                return Err(EnumConflict {
                    identity,
                    existing: existing.clone(),
                    incoming: labels,
                });
            }
            return Ok(EnumHandle(index));
        }

        let (index, _) = self.entries.insert_full(identity, labels);
        Ok(EnumHandle(index))
    }

    /// Labels of a registered enum.
    pub fn get(&self, handle: EnumHandle) -> Option<&[String]> {
        self.entries
            .get_index(handle.0)
            .map(|(_, labels)| labels.as_slice())
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (EnumHandle, &QualifiedName, &[String])> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (identity, labels))| (EnumHandle(i), identity, labels.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for EnumCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            identity: &'a QualifiedName,
            labels: &'a [String],
        }

        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (identity, labels) in &self.entries {
            seq.serialize_element(&Entry { identity, labels })?;
        }
        seq.end()
    }
}
