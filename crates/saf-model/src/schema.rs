//! Recognized column catalogs.
//!
//! Item fields are dot-delimited names whose first segment selects the
//! metadata namespace (and therefore the XML file) the value is written to.
//! Bitstream fields describe one referenced file and end up in the
//! `contents` manifest instead.

use serde::{Deserialize, Serialize};

use crate::bitstream::BitstreamField;
use crate::error::{Result, SafError};

/// Column whose non-blank value opens a new item.
pub const TITLE_FIELD: &str = "dc.title";

/// Column naming the file a row contributes.
pub const FILENAME_FIELD: &str = "Filename";

/// Item fields recognized out of the box, in declaration order.
pub const DEFAULT_ITEM_FIELDS: &[&str] = &[
    "dc.title",
    "dc.description.abstract",
    "dc.description",
    "dc.contributor.author",
    "dc.contributor",
    "dc.date.issued",
    "dc.date.created",
    "dc.subject",
    "dc.type",
    "dc.coverage.spatial",
    "dc.rights",
    "dc.rights.uri",
    "dc.format.medium",
    "dc.format.extent",
    "dspace.iiif.enabled",
    "iiif.canvas.naming",
];

/// Metadata namespace selected by a field's first dot-segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    DublinCore,
    Dspace,
    Iiif,
    Local,
}

impl Namespace {
    /// All namespaces in the order their files are written.
    pub const ALL: [Namespace; 4] = [
        Namespace::DublinCore,
        Namespace::Dspace,
        Namespace::Iiif,
        Namespace::Local,
    ];

    pub const fn prefix(self) -> &'static str {
        match self {
            Namespace::DublinCore => "dc",
            Namespace::Dspace => "dspace",
            Namespace::Iiif => "iiif",
            Namespace::Local => "local",
        }
    }

    /// The primary namespace is written without a `schema` attribute.
    pub const fn is_primary(self) -> bool {
        matches!(self, Namespace::DublinCore)
    }

    /// Value of the root `schema` attribute, if any.
    pub const fn schema_attribute(self) -> Option<&'static str> {
        if self.is_primary() {
            None
        } else {
            Some(self.prefix())
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Namespace::DublinCore => "dublin_core.xml",
            Namespace::Dspace => "metadata_dspace.xml",
            Namespace::Iiif => "metadata_iiif.xml",
            Namespace::Local => "metadata_local.xml",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.prefix() == prefix)
    }

    /// Namespace of a dotted field name (`dc.title` -> `DublinCore`).
    pub fn of_field(name: &str) -> Option<Self> {
        name.split_once('.')
            .and_then(|(prefix, _)| Self::from_prefix(prefix))
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A field name split into its metadata parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementName<'a> {
    pub namespace: Namespace,
    pub element: &'a str,
    pub qualifier: Option<&'a str>,
}

impl<'a> ElementName<'a> {
    /// Split `ns.element[.qualifier]`.
    ///
    /// Names with more than three dot-segments or an empty segment are not
    /// element names.
    pub fn parse(name: &'a str) -> Option<Self> {
        let mut parts = name.split('.');
        let namespace = Namespace::from_prefix(parts.next()?)?;
        let element = parts.next().filter(|part| !part.is_empty())?;
        let qualifier = match parts.next() {
            Some("") => return None,
            other => other,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            namespace,
            element,
            qualifier,
        })
    }
}

/// Ordered catalogs of recognized item and bitstream columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    item_fields: Vec<String>,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self {
            item_fields: DEFAULT_ITEM_FIELDS.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an additional item field, appended after the built-in ones.
    ///
    /// The name must live in a known namespace, must not collide with a
    /// bitstream column, and must not already be registered.
    pub fn with_item_field(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let well_formed = ElementName::parse(&name).is_some();
        if !well_formed || Self::is_bitstream_field(&name) || self.is_item_field(&name) {
            return Err(SafError::invalid_field(name));
        }
        self.item_fields.push(name);
        Ok(self)
    }

    pub fn item_fields(&self) -> impl Iterator<Item = &str> {
        self.item_fields.iter().map(String::as_str)
    }

    pub fn is_item_field(&self, name: &str) -> bool {
        self.item_fields.iter().any(|field| field == name)
    }

    pub fn is_bitstream_field(name: &str) -> bool {
        BitstreamField::from_column(name).is_some()
    }

    pub fn is_recognized(&self, name: &str) -> bool {
        self.is_item_field(name) || Self::is_bitstream_field(name)
    }
}
