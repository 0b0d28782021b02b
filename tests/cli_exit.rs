// tests/cli_exit.rs - Exit code and command-line tests
use clap::Parser;
use codecity_core::cli::dispatch::{execute, resolve_config};
use codecity_core::cli::Cli;
use codecity_core::config::OutputFormat;
use codecity_core::error::CityError;
use codecity_core::exit::CityExit;
use codecity_core::lang::Lang;
use codecity_core::model::flatten::parse_table;
use codecity_core::project::Project;
use codecity_core::reporting::Destination;
use codecity_core::types::NodeKind;
use std::fs;
use tempfile::TempDir;

fn project_dir() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::create_dir_all(d.path().join("pkg")).unwrap();
    fs::write(
        d.path().join("pkg/a.go"),
        "package pkg\n\nvar A = 1\nvar B = 2\n\ntype T struct {\n\tX int\n}\n",
    )
    .unwrap();
    d
}

fn exit_for(err: &anyhow::Error) -> CityExit {
    err.downcast_ref::<CityError>()
        .map_or(CityExit::Error, CityExit::from)
}

#[test]
fn test_exit_codes_distinct() {
    assert_eq!(CityExit::Success.code(), 0);
    assert_eq!(CityExit::Error.code(), 1);
    assert_eq!(CityExit::InvalidInput.code(), 2);
    assert_eq!(CityExit::WriteFailure.code(), 3);
}

#[test]
fn test_missing_project_is_invalid_input() {
    let d = tempfile::tempdir().unwrap();
    let err = Project::open(&d.path().join("nope")).unwrap_err();
    assert!(matches!(err, CityError::PathNotFound(_)));
    assert_eq!(CityExit::from(&err), CityExit::InvalidInput);
}

#[test]
fn test_file_project_is_invalid_input() {
    let d = project_dir();
    let err = Project::open(&d.path().join("pkg/a.go")).unwrap_err();
    assert!(matches!(err, CityError::NotADirectory(_)));
    assert_eq!(CityExit::from(&err), CityExit::InvalidInput);
}

#[test]
fn test_project_named_after_directory() {
    let d = project_dir();
    let project = Project::open(&d.path().join("pkg")).unwrap();
    assert_eq!(project.name, "pkg");
    assert!(project.root.is_absolute());
    assert_eq!(project.default_output("out").to_str(), Some("pkg.out"));
}

#[test]
fn test_parent_components_are_resolved_before_naming() {
    let d = project_dir();
    let project = Project::open(&d.path().join("pkg").join("..")).unwrap();
    let expected = d
        .path()
        .canonicalize()
        .unwrap()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert_eq!(project.name, expected);
    assert!(!project.root.ends_with(".."));
    assert_eq!(
        project.default_output("out"),
        std::path::PathBuf::from(format!("{expected}.out"))
    );
}

#[test]
fn test_unwritable_destination_is_write_failure() {
    let d = tempfile::tempdir().unwrap();
    let dest = Destination::File(d.path().join("missing/dir/report.out"));
    let err = dest.write("x").unwrap_err();
    assert!(matches!(err, CityError::Output { .. }));
    assert_eq!(CityExit::from(&err), CityExit::WriteFailure);
}

#[test]
fn test_cli_parses_positionals_and_flags() {
    let cli = Cli::try_parse_from([
        "codecity", "/some/project", "STDOUT", "--format", "json", "--ignore", "/gen/", "--lang",
        "rust", "--lang", "go", "-v",
    ])
    .unwrap();
    assert_eq!(cli.output.as_deref(), Some("STDOUT"));
    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert_eq!(cli.ignore, vec!["/gen/"]);
    assert_eq!(cli.languages, vec![Lang::Rust, Lang::Go]);
    assert!(cli.verbose);
}

#[test]
fn test_cli_requires_project() {
    assert!(Cli::try_parse_from(["codecity"]).is_err());
}

#[test]
fn test_cli_overrides_config_file() {
    let d = project_dir();
    fs::write(
        d.path().join("codecity.toml"),
        "[analysis]\nignore = [\"/third_party/\"]\n",
    )
    .unwrap();
    let dir = d.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["codecity", dir.as_str(), "--ignore", "/gen/", "--lang", "rust"])
        .unwrap();
    let project = Project::open(&cli.project).unwrap();
    let config = resolve_config(&cli, &project).unwrap();
    assert_eq!(config.ignore, vec!["/third_party/", "/gen/"]);
    assert_eq!(config.languages, vec![Lang::Rust]);
    assert_eq!(config.format, OutputFormat::Table);
}

#[test]
fn test_execute_writes_table_report() {
    let d = project_dir();
    let out = d.path().join("city.out");
    let dir = d.path().to_string_lossy().into_owned();
    let out_arg = out.to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["codecity", dir.as_str(), out_arg.as_str()]).unwrap();

    execute(&cli).unwrap();

    let rows = parse_table(&fs::read_to_string(&out).unwrap());
    let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "pkg", "pkg/a.go", "pkg/a.go.(T)"]);

    let file = &rows[2];
    assert_eq!(file.kind, NodeKind::File);
    // T is 2x2, padded by the file's two attributes.
    assert_eq!((file.root_w, file.root_d), (4.0, 4.0));
    assert_eq!(file.attrs, 3);
}

#[test]
fn test_execute_reports_missing_project() {
    let d = tempfile::tempdir().unwrap();
    let missing = d.path().join("gone").to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["codecity", missing.as_str(), "STDOUT"]).unwrap();
    let err = execute(&cli).unwrap_err();
    assert_eq!(exit_for(&err), CityExit::InvalidInput);
}
