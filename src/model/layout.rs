// src/model/layout.rs
//! Bottom-up sizing and placement of every node.

use std::cmp::Ordering;

use super::pack::pack;
use super::{CityModel, Node, NodeId};
use crate::types::{NodeKind, Position, Size};

/// Packages are packed among their siblings at this fixed size,
/// whatever their content measures.
pub const PACKAGE_AREA: Size = Size {
    width: 5.0,
    depth: 5.0,
};

/// Sizes every node and positions every child relative to its parent's center.
pub fn layout(model: &mut CityModel) {
    let root = model.root();
    layout_node(model, root);
}

fn layout_node(model: &mut CityModel, id: NodeId) {
    let node = model.node(id);
    if node.kind == NodeKind::Type || node.is_leaf() {
        let size = pad_file(node, leaf_size(node));
        let node = model.node_mut(id);
        node.footprint = size;
        node.child_area = size;
        return;
    }

    let mut children = node.children.clone();
    for &child in &children {
        layout_node(model, child);
        let child = model.node_mut(child);
        if child.kind == NodeKind::Package {
            child.child_area = PACKAGE_AREA;
        }
    }

    children.sort_by(|a, b| packing_order(model.node(*a), model.node(*b)));

    let sizes: Vec<Size> = children.iter().map(|c| model.node(*c).child_area).collect();
    let (positions, bounds) = pack(&sizes);
    for (&child, pos) in children.iter().zip(positions) {
        model.node_mut(child).position = Position {
            x: pos.x - bounds.width / 2.0,
            y: pos.y - bounds.depth / 2.0,
        };
    }

    let size = pad_file(model.node(id), bounds);
    let node = model.node_mut(id);
    node.footprint = size;
    node.child_area = size;
    node.children = children;
}

/// Widest child first; equal widths fall back to name order.
fn packing_order(a: &Node, b: &Node) -> Ordering {
    b.child_area
        .width
        .total_cmp(&a.child_area.width)
        .then_with(|| a.name.cmp(&b.name))
}

#[allow(clippy::cast_precision_loss)]
fn leaf_size(node: &Node) -> Size {
    Size::square(node.own.attributes as f64 + 1.0)
}

/// Files grow by their own attribute count on both axes.
#[allow(clippy::cast_precision_loss)]
fn pad_file(node: &Node, size: Size) -> Size {
    if node.kind != NodeKind::File {
        return size;
    }
    let pad = node.own.attributes as f64;
    Size::new(size.width + pad, size.depth + pad)
}
