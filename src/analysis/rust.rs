// src/analysis/rust.rs
//! Rust measurement rules, mirroring the Go ones: structs are the types,
//! `impl` functions are their methods. Free functions belong to the file, and
//! so does every `const`/`static` item, associated ones included.

use tree_sitter::Node;

use super::{decl_line, record, span_lines, text};
use crate::types::{earliest_line, MeasurementFeed};

pub fn measure(root: Node, source: &[u8], path: &str, feed: &mut MeasurementFeed) {
    let mut visitor = RustVisitor { source, path, feed };
    visitor.visit(root, None);
}

struct RustVisitor<'a> {
    source: &'a [u8],
    path: &'a str,
    feed: &'a mut MeasurementFeed,
}

impl<'a> RustVisitor<'a> {
    /// `owner` is the type of the enclosing `impl` block, if any.
    fn visit(&mut self, node: Node, owner: Option<&'a str>) {
        let owner = match node.kind() {
            "struct_item" => {
                self.visit_struct(node);
                None
            }
            "impl_item" => node
                .child_by_field_name("type")
                .and_then(|t| base_type_name(t, self.source)),
            "function_item" => {
                self.visit_function(node, owner);
                None
            }
            "const_item" | "static_item" => {
                let entry = record(self.feed, self.path, None);
                entry.attribute_count += 1;
                entry.decl_line = earliest_line(entry.decl_line, decl_line(node));
                owner
            }
            "mod_item" | "trait_item" => None,
            _ => owner,
        };

        for child in node.children(&mut node.walk()) {
            self.visit(child, owner);
        }
    }

    fn visit_struct(&mut self, node: Node) {
        let Some(name) = node.child_by_field_name("name").and_then(|n| text(n, self.source)) else {
            return;
        };
        let fields = node.child_by_field_name("body").map_or(0, count_fields);

        let entry = record(self.feed, self.path, Some(name));
        entry.attribute_count = fields;
        entry.line_count += span_lines(node);
        entry.decl_line = decl_line(node);
    }

    fn visit_function(&mut self, node: Node, owner: Option<&str>) {
        let entry = record(self.feed, self.path, owner);
        entry.method_count += 1;
        if let Some(body) = node.child_by_field_name("body") {
            entry.line_count += span_lines(body);
        }
    }
}

fn count_fields(body: Node) -> usize {
    let mut cursor = body.walk();
    let named = body.named_children(&mut cursor);
    match body.kind() {
        "field_declaration_list" => named.filter(|c| c.kind() == "field_declaration").count(),
        "ordered_field_declaration_list" => named
            .filter(|c| {
                !matches!(
                    c.kind(),
                    "visibility_modifier" | "attribute_item" | "line_comment" | "block_comment"
                )
            })
            .count(),
        _ => 0,
    }
}

fn base_type_name<'s>(node: Node, source: &'s [u8]) -> Option<&'s str> {
    match node.kind() {
        "type_identifier" => text(node, source),
        "scoped_type_identifier" => text(node.child_by_field_name("name")?, source),
        "generic_type" | "reference_type" => base_type_name(node.child_by_field_name("type")?, source),
        _ => None,
    }
}
