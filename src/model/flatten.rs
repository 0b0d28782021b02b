// src/model/flatten.rs
//! Fixed-width table report of a laid-out model, and a reader for it.

use std::fmt::Write;

use super::{CityModel, Node};
use crate::types::NodeKind;

const RULE_WIDTH: usize = 170;
const PLACEHOLDER: &str = "N/A";

pub const COLUMNS: [&str; 11] = [
    "Path", "Type", "Root_W", "Root_D", "Child_W", "Child_D", "Child_X", "Child_Y", "Lines",
    "Methods", "Attrs",
];

/// Renders the model as a table: header, rule, root row, then every
/// descendant in depth-first order with its path relative to the root.
#[must_use]
pub fn render_table(model: &CityModel) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<70} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}",
        COLUMNS[0],
        COLUMNS[1],
        COLUMNS[2],
        COLUMNS[3],
        COLUMNS[4],
        COLUMNS[5],
        COLUMNS[6],
        COLUMNS[7],
        COLUMNS[8],
        COLUMNS[9],
        COLUMNS[10]
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    let root = model.node(model.root());
    write_root_row(&mut out, root);

    let prefix = format!("{}/", root.full_path);
    for id in model.descendants(model.root()) {
        write_child_row(&mut out, model.node(id), &prefix);
    }
    out
}

fn write_root_row(out: &mut String, root: &Node) {
    let _ = writeln!(
        out,
        "{:<70} {:<10} {:<10.2} {:<10.2} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}",
        "/",
        root.kind.label(),
        root.footprint.width,
        root.footprint.depth,
        PLACEHOLDER,
        PLACEHOLDER,
        PLACEHOLDER,
        PLACEHOLDER,
        root.total.lines,
        root.total.methods,
        root.total.attributes,
    );
}

fn write_child_row(out: &mut String, node: &Node, prefix: &str) {
    let display = node
        .full_path
        .strip_prefix(prefix)
        .unwrap_or(&node.full_path);
    let _ = writeln!(
        out,
        "{:<70} {:<10} {:<10.2} {:<10.2} {:<10.2} {:<10.2} {:<10.2} {:<10.2} {:<10} {:<10} {:<10}",
        display,
        node.kind.label(),
        node.footprint.width,
        node.footprint.depth,
        node.child_area.width,
        node.child_area.depth,
        node.position.x,
        node.position.y,
        node.total.lines,
        node.total.methods,
        node.total.attributes,
    );
}

/// One data row of the table report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub path: String,
    pub kind: NodeKind,
    pub root_w: f64,
    pub root_d: f64,
    pub child_w: f64,
    pub child_d: f64,
    pub child_x: f64,
    pub child_y: f64,
    pub lines: usize,
    pub methods: usize,
    pub attrs: usize,
}

impl ReportRow {
    /// Parses one table line. Header, rule and blank lines yield `None`.
    /// `N/A` and unreadable numbers read as zero.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < COLUMNS.len() {
            return None;
        }
        let kind = NodeKind::from_label(parts[1])?;
        Some(Self {
            path: parts[0].to_string(),
            kind,
            root_w: parse_metric(parts[2]),
            root_d: parse_metric(parts[3]),
            child_w: parse_metric(parts[4]),
            child_d: parse_metric(parts[5]),
            child_x: parse_metric(parts[6]),
            child_y: parse_metric(parts[7]),
            lines: parts[8].parse().unwrap_or(0),
            methods: parts[9].parse().unwrap_or(0),
            attrs: parts[10].parse().unwrap_or(0),
        })
    }
}

/// Reads every data row of a rendered table.
#[must_use]
pub fn parse_table(text: &str) -> Vec<ReportRow> {
    text.lines().filter_map(ReportRow::parse).collect()
}

fn parse_metric(value: &str) -> f64 {
    if value == PLACEHOLDER {
        return 0.0;
    }
    value.parse().unwrap_or(0.0)
}

