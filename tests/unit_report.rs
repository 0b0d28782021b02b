// tests/unit_report.rs
use codecity_core::config::OutputFormat;
use codecity_core::model::export::render_json;
use codecity_core::model::flatten::{parse_table, render_table, ReportRow};
use codecity_core::model::CityModel;
use codecity_core::reporting::{self, Destination};
use codecity_core::types::{MetricsRecord, NodeKind};
use std::path::PathBuf;

fn model() -> CityModel {
    CityModel::new(
        [
            ("lib/a.go", MetricsRecord::new(12, 2, 4)),
            ("lib/b.go.(B)", MetricsRecord::new(7, 1, 1).with_decl_line(3)),
            ("main.go", MetricsRecord::new(5, 1, 2)),
        ],
        "proj",
    )
}

#[test]
fn test_table_header_and_rule() {
    let table = render_table(&model());
    let mut lines = table.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with(&format!("{:<70} {:<10} {:<10}", "Path", "Type", "Root_W")));
    assert!(header.trim_end().ends_with("Attrs"));
    assert_eq!(lines.next().unwrap(), "-".repeat(170));
}

#[test]
fn test_root_row_uses_placeholders() {
    let table = render_table(&model());
    let root_line = table.lines().nth(2).unwrap();
    assert!(root_line.starts_with(&format!("{:<70} PACKAGE    10.00      5.00       N/A", "/")));
    assert_eq!(root_line.matches("N/A").count(), 4);

    let row = ReportRow::parse(root_line).unwrap();
    assert_eq!(row.path, "/");
    assert_eq!(row.kind, NodeKind::Package);
    assert_eq!(row.child_w, 0.0);
    assert_eq!((row.lines, row.methods, row.attrs), (24, 4, 7));
}

#[test]
fn test_child_rows_are_relative_and_depth_first() {
    let rows = parse_table(&render_table(&model()));
    let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "lib", "lib/a.go", "lib/b.go", "lib/b.go.(B)", "main.go"]);

    let kinds: Vec<NodeKind> = rows.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Package,
            NodeKind::Package,
            NodeKind::File,
            NodeKind::File,
            NodeKind::Type,
            NodeKind::File
        ]
    );
}

#[test]
fn test_child_row_geometry_has_two_decimals() {
    let table = render_table(&model());
    let line = table
        .lines()
        .find(|l| l.starts_with("lib/a.go "))
        .unwrap();
    let expected = format!(
        "{:<70} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10} {:<10}",
        "lib/a.go", "FILE", "9.00", "9.00", "9.00", "9.00", "-1.00", "0.00", "12", "2", "4"
    );
    assert_eq!(line, expected);
}

#[test]
fn test_parse_rejects_non_rows() {
    assert!(ReportRow::parse("").is_none());
    assert!(ReportRow::parse(&"-".repeat(170)).is_none());
    assert!(ReportRow::parse("Path Type Root_W Root_D Child_W Child_D Child_X Child_Y Lines Methods Attrs").is_none());
    assert!(ReportRow::parse("a.go FILE 1.00 1.00").is_none());
}

#[test]
fn test_json_shape() {
    let json = render_json(&model()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "proj");
    assert_eq!(value["type"], "PACKAGE");
    assert_eq!(value["numberOfLines"], 24);

    let lib = &value["children"][0];
    assert_eq!(lib["name"], "lib");
    assert_eq!(lib["childWidth"], 5.0);
    assert_eq!(lib["childPosition"]["x"], -2.5);

    let b_type = &lib["children"][1]["children"][0];
    assert_eq!(b_type["type"], "STRUCT");
    assert_eq!(b_type["line"], 3);
    assert_eq!(b_type["children"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_render_dispatches_on_format() {
    let m = model();
    let table = reporting::render(&m, OutputFormat::Table).unwrap();
    assert!(table.starts_with("Path"));
    let json = reporting::render(&m, OutputFormat::Json).unwrap();
    assert!(json.trim_start().starts_with('{'));
}

#[test]
fn test_destination_from_arg() {
    let default = PathBuf::from("proj.out");
    assert_eq!(Destination::from_arg(Some("STDOUT"), default.clone()), Destination::Stdout);
    assert_eq!(
        Destination::from_arg(Some("city.txt"), default.clone()),
        Destination::File(PathBuf::from("city.txt"))
    );
    assert_eq!(Destination::from_arg(None, default.clone()), Destination::File(default));
}
