//! Element building: one normalized element per embedded object.
//!
//! Elements keep the panel's object order. Inside a value, keys come out
//! sorted (serde_json's default map), so two builds of the same panel
//! serialize identically.

pub mod decode;

pub use decode::{FieldDecode, SERIALIZED_FIELDS, decode_field, decode_map};

use crate::index::IndexAction;
use crate::panel::{ObjectEntry, PanelDocument};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,

    pub id: String,

    pub value: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_action: Option<IndexAction>,
}

impl Element {
    pub fn from_entry(entry: &ObjectEntry) -> Self {
        let mut value = entry.value.clone();
        if let Value::Object(map) = &mut value {
            decode_map(map);
        }
        Self {
            kind: entry.kind.clone(),
            id: entry.id.clone(),
            value,
            index_action: None,
        }
    }
}

/// Build the element set for a validated panel.
pub fn build_elements(panel: &PanelDocument) -> Vec<Element> {
    let elements: Vec<Element> = panel.objects.iter().map(Element::from_entry).collect();
    tracing::debug!(panel = %panel.id, count = elements.len(), "elements built");
    elements
}
