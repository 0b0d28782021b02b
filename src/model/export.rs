// src/model/export.rs
//! Nested JSON form of the model.

use serde::Serialize;

use super::{CityModel, NodeId};
use crate::error::Result;
use crate::types::{NodeKind, Position};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub width: f64,
    pub depth: f64,
    pub child_width: f64,
    pub child_depth: f64,
    pub child_position: Position,
    pub number_of_lines: usize,
    pub number_of_methods: usize,
    pub number_of_attributes: usize,
    pub line: usize,
    pub children: Vec<JsonNode>,
}

impl JsonNode {
    #[must_use]
    pub fn from_model(model: &CityModel) -> Self {
        Self::from_node(model, model.root())
    }

    fn from_node(model: &CityModel, id: NodeId) -> Self {
        let node = model.node(id);
        Self {
            name: node.name.clone(),
            kind: node.kind,
            width: node.footprint.width,
            depth: node.footprint.depth,
            child_width: node.child_area.width,
            child_depth: node.child_area.depth,
            child_position: node.position,
            number_of_lines: node.total.lines,
            number_of_methods: node.total.methods,
            number_of_attributes: node.total.attributes,
            line: node.decl_line,
            children: node
                .children
                .iter()
                .map(|&c| Self::from_node(model, c))
                .collect(),
        }
    }
}

/// Pretty-printed JSON of the whole tree.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_json(model: &CityModel) -> Result<String> {
    let mut text = serde_json::to_string_pretty(&JsonNode::from_model(model))?;
    text.push('\n');
    Ok(text)
}
