// src/model/aggregate.rs
use super::{CityModel, NodeId};
use crate::types::Metrics;

/// Fills every node's `total` with its own metrics plus all of its descendants'.
///
/// Must run after the tree is fully built; running it earlier would miss
/// records merged in afterwards.
pub fn accumulate(model: &mut CityModel) {
    let root = model.root();
    accumulate_node(model, root);
}

fn accumulate_node(model: &mut CityModel, id: NodeId) -> Metrics {
    let children = model.node(id).children.clone();
    let mut total = model.node(id).own;
    for child in children {
        total += accumulate_node(model, child);
    }
    model.node_mut(id).total = total;
    total
}
