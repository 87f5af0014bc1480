//! Reference resolution between saved objects.

use crate::element::Element;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Saved search a visualization is built on, if any.
///
/// Visualizations with their own ad-hoc query (in `searchSourceJSON`) have no
/// dependency; only a non-empty `savedSearchId` counts.
pub fn search_from_vis_json(value: &Value) -> Option<&str> {
    value
        .get("savedSearchId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

/// A directed link from one element to another saved object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub source_type: String,
    pub source_id: String,
    pub target_type: String,
    pub target_id: String,
}

/// All outgoing references of an element set, in element order.
///
/// - visualization -> search, via `savedSearchId`
/// - dashboard -> panel objects, via the entries of a decoded `panelsJSON`
pub fn references(elements: &[Element]) -> Vec<Reference> {
    let mut out = Vec::new();
    for e in elements {
        let mut push = |target_type: &str, target_id: &str| {
            out.push(Reference {
                source_type: e.kind.clone(),
                source_id: e.id.clone(),
                target_type: target_type.to_string(),
                target_id: target_id.to_string(),
            })
        };

        match e.kind.as_str() {
            "visualization" => {
                if let Some(search) = search_from_vis_json(&e.value) {
                    push("search", search);
                }
            }
            "dashboard" => {
                let Some(panels) = e.value.get("panelsJSON").and_then(Value::as_array) else {
                    continue;
                };
                for p in panels {
                    let kind = p.get("type").and_then(Value::as_str);
                    let id = p.get("id").and_then(Value::as_str);
                    if let (Some(kind), Some(id)) = (kind, id) {
                        push(kind, id);
                    }
                }
            }
            _ => {}
        }
    }
    out
}

/// References whose target is not part of the element set.
pub fn dangling_references(elements: &[Element]) -> Vec<Reference> {
    let present: BTreeSet<(&str, &str)> = elements
        .iter()
        .map(|e| (e.kind.as_str(), e.id.as_str()))
        .collect();
    references(elements)
        .into_iter()
        .filter(|r| !present.contains(&(r.target_type.as_str(), r.target_id.as_str())))
        .collect()
}
