// src/analysis/go.rs
//! Go measurement rules.
//!
//! - every `var`/`const` spec adds an attribute to its file
//! - every struct type becomes a record holding its field count and span
//! - every function adds a method (and its body lines) to its receiver's
//!   type, or to the file when it has no receiver

use tree_sitter::Node;

use super::{decl_line, record, span_lines, text};
use crate::types::{earliest_line, MeasurementFeed};

pub fn measure(root: Node, source: &[u8], path: &str, feed: &mut MeasurementFeed) {
    let mut visitor = GoVisitor { source, path, feed };
    visitor.visit(root);
}

struct GoVisitor<'a> {
    source: &'a [u8],
    path: &'a str,
    feed: &'a mut MeasurementFeed,
}

impl GoVisitor<'_> {
    fn visit(&mut self, node: Node) {
        match node.kind() {
            "var_spec" | "const_spec" => self.visit_value_spec(node),
            "type_spec" => self.visit_type_spec(node),
            "function_declaration" => self.visit_function(node, None),
            "method_declaration" => {
                let receiver = node
                    .child_by_field_name("receiver")
                    .and_then(|r| receiver_type_name(r, self.source));
                self.visit_function(node, receiver);
            }
            _ => {}
        }

        for child in node.children(&mut node.walk()) {
            self.visit(child);
        }
    }

    fn visit_value_spec(&mut self, node: Node) {
        let entry = record(self.feed, self.path, None);
        entry.attribute_count += 1;
        entry.decl_line = earliest_line(entry.decl_line, decl_line(node));
    }

    fn visit_type_spec(&mut self, node: Node) {
        let Some(body) = node.child_by_field_name("type") else {
            return;
        };
        if body.kind() != "struct_type" {
            return;
        }
        let Some(name) = node.child_by_field_name("name").and_then(|n| text(n, self.source)) else {
            return;
        };

        let entry = record(self.feed, self.path, Some(name));
        entry.attribute_count = count_fields(body);
        entry.line_count += span_lines(body);
        entry.decl_line = decl_line(body);
    }

    fn visit_function(&mut self, node: Node, receiver: Option<&str>) {
        let entry = record(self.feed, self.path, receiver);
        entry.method_count += 1;
        if let Some(body) = node.child_by_field_name("body") {
            entry.line_count += span_lines(body);
        }
    }
}

/// Number of field declarations in a `struct_type` (`a, b int` counts once).
fn count_fields(struct_type: Node) -> usize {
    let mut cursor = struct_type.walk();
    struct_type
        .children(&mut cursor)
        .filter(|c| c.kind() == "field_declaration_list")
        .map(|list| {
            let mut inner = list.walk();
            list.named_children(&mut inner)
                .filter(|f| f.kind() == "field_declaration")
                .count()
        })
        .sum()
}

/// Base type name of a receiver list such as `(s *Stack[T])`.
fn receiver_type_name<'s>(receiver: Node, source: &'s [u8]) -> Option<&'s str> {
    let mut cursor = receiver.walk();
    let param = receiver
        .named_children(&mut cursor)
        .find(|c| c.kind() == "parameter_declaration")?;
    base_type_name(param.child_by_field_name("type")?, source)
}

fn base_type_name<'s>(node: Node, source: &'s [u8]) -> Option<&'s str> {
    match node.kind() {
        "type_identifier" => text(node, source),
        "qualified_type" => text(node.child_by_field_name("name")?, source),
        "generic_type" => match node.child_by_field_name("type") {
            Some(inner) => base_type_name(inner, source),
            None => base_type_name(node.named_child(0)?, source),
        },
        "pointer_type" | "parenthesized_type" => base_type_name(node.named_child(0)?, source),
        _ => {
            let mut cursor = node.walk();
            let children: Vec<Node> = node.named_children(&mut cursor).collect();
            children.into_iter().find_map(|c| base_type_name(c, source))
        }
    }
}
