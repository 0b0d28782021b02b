// src/model/builder.rs
//! Folds the measurement feed into the containment tree.

use std::borrow::Borrow;

use super::{CityModel, Node, NodeId};
use crate::identifier::Identifier;
use crate::types::{earliest_line, MetricsRecord, NodeKind};

/// Builds an unlaid-out tree rooted at a package named `root_name`.
///
/// Records sharing a node (same file, or same file and type) are summed.
/// Entries are visited in identifier order so the result never depends on
/// the iteration order of the caller's map.
#[must_use]
pub fn build<I, K, R>(records: I, root_name: &str) -> CityModel
where
    I: IntoIterator<Item = (K, R)>,
    K: AsRef<str>,
    R: Borrow<MetricsRecord>,
{
    let mut entries: Vec<(K, R)> = records.into_iter().collect();
    entries.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

    let mut model = CityModel::with_root(root_name);
    for (key, record) in &entries {
        insert(&mut model, key.as_ref(), record.borrow());
    }
    finalize_children(&mut model);

    log::debug!(
        "Built city tree '{root_name}' with {} nodes from {} records",
        model.len(),
        entries.len()
    );
    model
}

fn insert(model: &mut CityModel, raw: &str, record: &MetricsRecord) {
    let ident = Identifier::decompose(raw);

    let mut current = model.root();
    for segment in &ident.path_segments {
        current = model.child_or_insert(current, segment, NodeKind::Package, |parent| {
            format!("{parent}/{segment}")
        });
    }

    let file_name = &ident.file_name;
    let file = model.child_or_insert(current, file_name, NodeKind::File, |parent| {
        format!("{parent}/{file_name}")
    });

    let target = match &ident.type_name {
        Some(type_name) => model.child_or_insert(file, type_name, NodeKind::Type, |parent| {
            format!("{parent}.({type_name})")
        }),
        None => file,
    };

    merge_into(model.node_mut(target), record);
}

fn merge_into(node: &mut Node, record: &MetricsRecord) {
    node.own += record.metrics();
    node.decl_line = earliest_line(node.decl_line, record.decl_line);
}

/// Turns every node's child lookup into its `children` sequence.
fn finalize_children(model: &mut CityModel) {
    for index in 0..model.len() {
        let id = NodeId(index);
        let mut children: Vec<NodeId> = model.node(id).lookup.values().copied().collect();
        children.sort_by(|a, b| model.node(*a).name.cmp(&model.node(*b).name));
        model.node_mut(id).children = children;
    }
}
