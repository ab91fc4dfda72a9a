//! One referenced file and its IIIF display metadata.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SafError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitstreamField {
    Filename,
    Label,
    Description,
    Toc,
}

impl BitstreamField {
    /// Fields in manifest suffix order (filename first).
    pub const ALL: [BitstreamField; 4] = [
        BitstreamField::Filename,
        BitstreamField::Label,
        BitstreamField::Description,
        BitstreamField::Toc,
    ];

    /// Input column carrying this field.
    pub const fn column(self) -> &'static str {
        match self {
            BitstreamField::Filename => "Filename",
            BitstreamField::Label => "iiif.label",
            BitstreamField::Description => "iiif.description",
            BitstreamField::Toc => "iiif.toc",
        }
    }

    /// Key used for the tab-separated suffix in `contents`.
    pub const fn manifest_key(self) -> Option<&'static str> {
        match self {
            BitstreamField::Filename => None,
            BitstreamField::Label => Some("iiif-label"),
            BitstreamField::Description => Some("iiif-description"),
            BitstreamField::Toc => Some("iiif-toc"),
        }
    }

    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.column() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitstream {
    filename: Option<String>,
    label: Option<String>,
    description: Option<String>,
    toc: Option<String>,
}

impl Bitstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field by column name.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = BitstreamField::from_column(name).ok_or_else(|| SafError::invalid_field(name))?;
        self.set(field, value);
        Ok(())
    }

    /// Read a field by column name.
    pub fn field(&self, name: &str) -> Result<Option<&str>> {
        let field = BitstreamField::from_column(name).ok_or_else(|| SafError::invalid_field(name))?;
        Ok(self.get(field))
    }

    pub fn set(&mut self, field: BitstreamField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn get(&self, field: BitstreamField) -> Option<&str> {
        let slot = match field {
            BitstreamField::Filename => &self.filename,
            BitstreamField::Label => &self.label,
            BitstreamField::Description => &self.description,
            BitstreamField::Toc => &self.toc,
        };
        slot.as_deref()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn has_filename(&self) -> bool {
        self.filename.is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, field: BitstreamField) -> &mut Option<String> {
        match field {
            BitstreamField::Filename => &mut self.filename,
            BitstreamField::Label => &mut self.label,
            BitstreamField::Description => &mut self.description,
            BitstreamField::Toc => &mut self.toc,
        }
    }
}
