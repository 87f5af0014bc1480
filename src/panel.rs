//! Panel document shape and the shallow validator.
//!
//! JSON shape:
//! {
//!   "id": "git",
//!   "objects": [
//!     { "type": "visualization", "id": "git_main_metrics", "value": { ... } },
//!     ...
//!   ]
//! }
//!
//! Only the top level is checked here. Object values are carried as-is and
//! any problem inside them is the element builder's business.

use crate::error::FormatError;
use crate::locate::Provenance;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDocument {
    pub id: String,

    #[serde(default)]
    pub objects: Vec<ObjectEntry>,
}

/// One saved object embedded in a panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectEntry {
    #[serde(rename = "type")]
    pub kind: String,

    pub id: String,

    #[serde(default)]
    pub value: Value,
}

/// A parsed panel and the tier it was loaded from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadedPanel {
    pub panel: PanelDocument,
    pub provenance: Provenance,
}

impl PanelDocument {
    /// Decode and validate raw panel content.
    pub fn parse(bytes: &[u8]) -> Result<Self, FormatError> {
        let raw: Value = serde_json::from_slice(bytes).map_err(FormatError::Syntax)?;

        if raw.get("id").is_none() {
            return Err(FormatError::MissingId);
        }
        // `objects: null` counts as absent.
        let raw = match raw {
            Value::Object(mut map) => {
                if map.get("objects").is_some_and(Value::is_null) {
                    map.remove("objects");
                }
                Value::Object(map)
            }
            other => other,
        };

        serde_json::from_value(raw).map_err(FormatError::Shape)
    }
}
