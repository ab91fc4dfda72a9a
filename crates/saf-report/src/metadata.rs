//! Per-namespace metadata XML files (`dublin_core.xml`, `metadata_<ns>.xml`).

use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::Deserialize;
use tracing::debug;

use saf_model::{ElementName, Item, Namespace, SafError};

use crate::error::{ReportError, Result};

const ROOT_ELEMENT: &str = "dublin_core";
const VALUE_ELEMENT: &str = "dcvalue";

/// One `<dcvalue>` entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DcValue {
    pub element: String,
    pub qualifier: Option<String>,
    pub value: String,
}

/// A parsed metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDocument {
    pub schema: Option<String>,
    pub values: Vec<DcValue>,
}

/// Render the metadata file for `namespace`.
///
/// Returns `None` for a secondary namespace with no set fields; the primary
/// namespace is always rendered. Values appear in schema declaration order.
pub fn render_metadata_xml(item: &Item, namespace: Namespace) -> Result<Option<Vec<u8>>> {
    if !namespace.is_primary() && !item.has_fields_in(namespace) {
        return Ok(None);
    }

    let file = namespace.file_name();
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);
    let mut write = |event: Event<'_>| {
        xml.write_event(event)
            .map_err(|source| ReportError::XmlWrite { file, source })
    };
    write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new(ROOT_ELEMENT);
    if let Some(schema) = namespace.schema_attribute() {
        root.push_attribute(("schema", schema));
    }
    write(Event::Start(root))?;

    for (name, value) in item.set_fields_in(namespace) {
        let parts = ElementName::parse(name).ok_or_else(|| SafError::invalid_field(name))?;
        let mut node = BytesStart::new(VALUE_ELEMENT);
        node.push_attribute(("element", parts.element));
        if let Some(qualifier) = parts.qualifier {
            node.push_attribute(("qualifier", qualifier));
        }
        write(Event::Start(node))?;
        write(Event::Text(BytesText::new(value)))?;
        write(Event::End(BytesEnd::new(VALUE_ELEMENT)))?;
    }

    write(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    let mut bytes = xml.into_inner();
    bytes.push(b'\n');
    Ok(Some(bytes))
}

/// Write every metadata file the item needs into `unit_dir`.
pub fn write_metadata_files(unit_dir: &Path, item: &Item) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for namespace in Namespace::ALL {
        let Some(bytes) = render_metadata_xml(item, namespace)? else {
            debug!(namespace = %namespace, "no fields set; metadata file skipped");
            continue;
        };
        let path = unit_dir.join(namespace.file_name());
        fs::write(&path, bytes).map_err(|source| ReportError::io("write", &path, source))?;
        written.push(path);
    }
    Ok(written)
}

#[derive(Deserialize)]
struct DublinCoreXml {
    #[serde(rename = "@schema", default)]
    schema: Option<String>,
    #[serde(rename = "dcvalue", default)]
    values: Vec<DcValueXml>,
}

#[derive(Deserialize)]
struct DcValueXml {
    #[serde(rename = "@element")]
    element: String,
    #[serde(rename = "@qualifier", default)]
    qualifier: Option<String>,
    #[serde(rename = "$text", default)]
    value: String,
}

/// Parse a metadata file back into its schema and values.
pub fn parse_metadata_xml(xml: &str) -> Result<MetadataDocument> {
    let doc: DublinCoreXml = quick_xml::de::from_str(xml)?;
    Ok(MetadataDocument {
        schema: doc.schema,
        values: doc
            .values
            .into_iter()
            .map(|value| DcValue {
                element: value.element,
                qualifier: value.qualifier,
                value: value.value,
            })
            .collect(),
    })
}

pub fn read_metadata_file(path: &Path) -> Result<MetadataDocument> {
    let xml = fs::read_to_string(path).map_err(|source| ReportError::io("read", path, source))?;
    parse_metadata_xml(&xml)
}
