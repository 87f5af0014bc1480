//! Bulk-index addressing for built elements.
//!
//! Saved objects live in the `.kibana` index under `_id = "<type>:<id>"`.
//! The naming policy is kept in [`IndexNaming`] so it can change without
//! touching element building.

use crate::element::Element;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_COLLECTION: &str = ".kibana";
pub const DEFAULT_ID_SEPARATOR: &str = ":";

/// Where a single element goes in the bulk request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexAction {
    pub target_collection: String,
    pub document_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexNaming {
    pub target_collection: String,
    pub separator: String,
}

impl Default for IndexNaming {
    fn default() -> Self {
        Self {
            target_collection: DEFAULT_TARGET_COLLECTION.to_string(),
            separator: DEFAULT_ID_SEPARATOR.to_string(),
        }
    }
}

impl IndexNaming {
    pub fn with_target_collection(mut self, name: impl Into<String>) -> Self {
        self.target_collection = name.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn document_id(&self, kind: &str, id: &str) -> String {
        format!("{}{}{}", kind, self.separator, id)
    }

    pub fn action_for(&self, element: &Element) -> IndexAction {
        IndexAction {
            target_collection: self.target_collection.clone(),
            document_id: self.document_id(&element.kind, &element.id),
        }
    }
}

/// Attach an index action to every element, replacing any previous one.
pub fn add_index_elements(elements: &mut [Element], naming: &IndexNaming) {
    for element in elements.iter_mut() {
        element.index_action = Some(naming.action_for(element));
    }
}
