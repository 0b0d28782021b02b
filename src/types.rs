// src/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::AddAssign;

/// Raw measurements keyed by symbol identifier (`dir/file.go` or `dir/file.go.(Type)`).
pub type MeasurementFeed = HashMap<String, MetricsRecord>;

/// One measurement contribution for a symbol, as produced by the analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub line_count: usize,
    pub method_count: usize,
    pub attribute_count: usize,
    /// 1-based source line of the declaration, 0 when unknown.
    pub decl_line: usize,
}

impl MetricsRecord {
    #[must_use]
    pub fn new(line_count: usize, method_count: usize, attribute_count: usize) -> Self {
        Self {
            line_count,
            method_count,
            attribute_count,
            decl_line: 0,
        }
    }

    #[must_use]
    pub fn with_decl_line(mut self, line: usize) -> Self {
        self.decl_line = line;
        self
    }

    /// Sums the counts and keeps the earliest known declaration line.
    pub fn merge(&mut self, other: &MetricsRecord) {
        self.line_count += other.line_count;
        self.method_count += other.method_count;
        self.attribute_count += other.attribute_count;
        self.decl_line = earliest_line(self.decl_line, other.decl_line);
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        Metrics {
            lines: self.line_count,
            methods: self.method_count,
            attributes: self.attribute_count,
        }
    }
}

/// Picks the smaller non-zero line; zero means "not recorded".
#[must_use]
pub fn earliest_line(a: usize, b: usize) -> usize {
    match (a, b) {
        (0, x) | (x, 0) => x,
        (x, y) => x.min(y),
    }
}

/// Line, method and attribute counts of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub lines: usize,
    pub methods: usize,
    pub attributes: usize,
}

impl AddAssign for Metrics {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.methods += rhs.methods;
        self.attributes += rhs.attributes;
    }
}

/// Width/depth of a box on the city ground plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub depth: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, depth: f64) -> Self {
        Self { width, depth }
    }

    #[must_use]
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Offset of a box center from its parent's center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "PACKAGE")]
    Package,
    #[serde(rename = "FILE")]
    File,
    #[serde(rename = "STRUCT")]
    Type,
}

impl NodeKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Package => "PACKAGE",
            Self::File => "FILE",
            Self::Type => "STRUCT",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "PACKAGE" => Some(Self::Package),
            "FILE" => Some(Self::File),
            "STRUCT" => Some(Self::Type),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
