//! One catalog record: item-level metadata plus its attached bitstreams.

use serde::{Deserialize, Serialize};

use crate::bitstream::Bitstream;
use crate::error::{Result, SafError};
use crate::schema::{FieldSchema, Namespace, TITLE_FIELD};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct FieldSlot {
    name: String,
    value: Option<String>,
}

/// Item metadata keyed by the recognized item fields of a [`FieldSchema`].
///
/// Every item owns its own slot list, built from the schema at construction,
/// so no state is shared between items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    fields: Vec<FieldSlot>,
    bitstreams: Vec<Bitstream>,
}

impl Item {
    pub fn new(schema: &FieldSchema) -> Self {
        let fields = schema
            .item_fields()
            .map(|name| FieldSlot {
                name: name.to_string(),
                value: None,
            })
            .collect();
        Self {
            fields,
            bitstreams: Vec::new(),
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = self
            .fields
            .iter_mut()
            .find(|slot| slot.name == name)
            .ok_or_else(|| SafError::invalid_field(name))?;
        slot.value = Some(value.into());
        Ok(())
    }

    pub fn field(&self, name: &str) -> Result<Option<&str>> {
        self.fields
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.value.as_deref())
            .ok_or_else(|| SafError::invalid_field(name))
    }

    pub fn title(&self) -> Option<&str> {
        self.field(TITLE_FIELD).ok().flatten()
    }

    /// Attach a bitstream; one without a filename is dropped.
    ///
    /// Returns whether the bitstream was attached.
    pub fn add_bitstream(&mut self, bitstream: Bitstream) -> bool {
        if !bitstream.has_filename() {
            return false;
        }
        self.bitstreams.push(bitstream);
        true
    }

    pub fn bitstreams(&self) -> &[Bitstream] {
        &self.bitstreams
    }

    /// Set fields as `(name, value)` in schema declaration order.
    pub fn set_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|slot| {
            slot.value
                .as_deref()
                .map(|value| (slot.name.as_str(), value))
        })
    }

    pub fn set_fields_in(&self, namespace: Namespace) -> impl Iterator<Item = (&str, &str)> {
        self.set_fields()
            .filter(move |(name, _)| Namespace::of_field(name) == Some(namespace))
    }

    pub fn has_fields_in(&self, namespace: Namespace) -> bool {
        self.set_fields_in(namespace).next().is_some()
    }

    /// Clear every field and drop all attached bitstreams.
    pub fn reset(&mut self) {
        for slot in &mut self.fields {
            slot.value = None;
        }
        self.bitstreams = Vec::new();
    }

    pub fn is_empty(&self) -> bool {
        self.set_fields().next().is_none() && self.bitstreams.is_empty()
    }
}
