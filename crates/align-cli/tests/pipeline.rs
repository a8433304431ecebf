//! End-to-end requests over workbooks written to a temp directory.

use std::path::{Path, PathBuf};

use align_cli::pipeline::{AlignRequest, RequestError, run_request};
use align_ingest::{CellTyping, read_table};
use align_output::{ALIGNED_FILE, NOT_FOUND_FILE, NOT_FOUND_SHEET};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// Writes `columns` as a single-sheet workbook, one column per entry.
fn write_sheet(path: &Path, columns: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, values) in columns.iter().enumerate() {
        for (row, value) in values.iter().enumerate() {
            if !value.is_empty() {
                sheet
                    .write_string(row as u32, col as u16, *value)
                    .unwrap();
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Reference sheets carry a header row that mapping construction ignores.
fn write_reference(path: &Path, groups: &[&[&str]]) {
    let headers: Vec<String> = (1..=groups.len()).map(|i| format!("Group {i}")).collect();
    let columns: Vec<Vec<&str>> = groups
        .iter()
        .zip(&headers)
        .map(|(group, header)| {
            let mut column = vec![header.as_str()];
            column.extend_from_slice(group);
            column
        })
        .collect();
    let columns: Vec<&[&str]> = columns.iter().map(Vec::as_slice).collect();
    write_sheet(path, &columns);
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("AddtlFiles")).unwrap();
        Self { dir }
    }

    fn reference_dir(&self) -> PathBuf {
        self.dir.path().join("AddtlFiles")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn request(&self, input: &str) -> AlignRequest {
        AlignRequest::new(self.path(input)).with_reference_dir(self.reference_dir())
    }
}

fn column_names(path: &Path) -> Vec<String> {
    read_table(path, CellTyping::Text)
        .unwrap()
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect()
}

#[test]
fn aligns_upload_against_derived_reference() {
    let fx = Fixture::new();
    write_reference(
        &fx.reference_dir().join("acme-header.xlsx"),
        &[&["ID", "EmployeeID"], &["Name", "Full Name", "FN"]],
    );
    write_sheet(
        &fx.path("acme-2024-jan.xlsx"),
        &[&["FN", "Ann", "Bo"], &["Phone", "555", "556"]],
    );

    let outcome = run_request(&fx.request("acme-2024-jan.xlsx")).unwrap();

    assert_eq!(outcome.reference, fx.reference_dir().join("acme-header.xlsx"));
    assert_eq!(outcome.alignment.unmatched, vec!["Phone".to_string()]);

    let outputs = outcome.outputs.unwrap();
    assert_eq!(outputs.aligned, fx.path(ALIGNED_FILE));
    assert_eq!(column_names(&outputs.aligned), vec!["ID", "Name"]);

    let aligned = read_table(&outputs.aligned, CellTyping::Text).unwrap();
    let names = aligned.column("Name").unwrap().str().unwrap();
    assert_eq!(names.get(0), Some("Ann"));
    assert_eq!(names.get(1), Some("Bo"));

    let not_found = outputs.not_found.unwrap();
    assert_eq!(not_found, fx.path(NOT_FOUND_FILE));
    let listed = read_table(&not_found, CellTyping::Text).unwrap();
    let listed = listed.column(NOT_FOUND_SHEET).unwrap().str().unwrap();
    assert_eq!(listed.get(0), Some("Phone"));
}

#[test]
fn missing_reference_stops_before_alignment() {
    let fx = Fixture::new();
    write_sheet(&fx.path("acme-jan.xlsx"), &[&["FN", "Ann"]]);

    let err = run_request(&fx.request("acme-jan.xlsx")).unwrap_err();

    match err {
        RequestError::ReferenceNotFound { path } => {
            assert_eq!(path, fx.reference_dir().join("acme-header.xlsx"));
        }
        other => panic!("expected ReferenceNotFound, got {other}"),
    }
    assert!(!fx.path(ALIGNED_FILE).exists());
}

#[test]
fn explicit_reference_skips_discovery() {
    let fx = Fixture::new();
    let reference = fx.path("custom-reference.xlsx");
    write_reference(&reference, &[&["Name", "FN"]]);
    write_sheet(&fx.path("upload.xlsx"), &[&["FN", "Ann"]]);

    let outcome = run_request(
        &fx.request("upload.xlsx")
            .with_reference(Some(reference.clone()))
            .with_dry_run(true),
    )
    .unwrap();

    assert_eq!(outcome.reference, reference);
    assert!(outcome.alignment.unmatched.is_empty());
}

#[test]
fn unsupported_input_is_rejected() {
    let fx = Fixture::new();
    std::fs::write(fx.path("acme-jan.txt"), "FN\nAnn\n").unwrap();

    let err = run_request(&fx.request("acme-jan.txt")).unwrap_err();

    assert!(matches!(err, RequestError::UnsupportedInputFormat { .. }));
}

#[test]
fn unreadable_input_is_input_read_error() {
    let fx = Fixture::new();
    write_reference(&fx.reference_dir().join("acme-header.xlsx"), &[&["Name"]]);
    std::fs::write(fx.path("acme-jan.xlsx"), b"not a workbook").unwrap();

    let err = run_request(&fx.request("acme-jan.xlsx")).unwrap_err();

    assert!(matches!(err, RequestError::InputRead { .. }));
}

#[test]
fn corrupt_reference_is_reference_read_error() {
    let fx = Fixture::new();
    std::fs::write(fx.reference_dir().join("acme-header.xlsx"), b"garbage").unwrap();
    write_sheet(&fx.path("acme-jan.xlsx"), &[&["FN", "Ann"]]);

    let err = run_request(&fx.request("acme-jan.xlsx")).unwrap_err();

    assert!(matches!(err, RequestError::ReferenceRead { .. }));
}

#[test]
fn dry_run_writes_nothing() {
    let fx = Fixture::new();
    write_reference(&fx.reference_dir().join("acme-header.xlsx"), &[&["Name", "FN"]]);
    write_sheet(&fx.path("acme-jan.xlsx"), &[&["FN", "Ann"]]);

    let outcome = run_request(&fx.request("acme-jan.xlsx").with_dry_run(true)).unwrap();

    assert!(outcome.outputs.is_none());
    assert!(!fx.path(ALIGNED_FILE).exists());
}

#[test]
fn csv_upload_with_output_dir() {
    let fx = Fixture::new();
    write_reference(
        &fx.reference_dir().join("acme-header.xlsx"),
        &[&["ID", "EmployeeID"], &["Name", "FN"]],
    );
    std::fs::write(fx.path("acme-feb.csv"), "EmployeeID,FN\n7,Ann\n8,Bo\n").unwrap();
    let out = fx.path("out");

    let outcome = run_request(
        &fx.request("acme-feb.csv")
            .with_output_dir(Some(out.clone()))
            .with_typing(CellTyping::Infer),
    )
    .unwrap();

    let aligned = outcome.outputs.unwrap().aligned;
    assert_eq!(aligned, out.join(ALIGNED_FILE));
    let table = read_table(&aligned, CellTyping::Text).unwrap();
    let ids = table.column("ID").unwrap().str().unwrap();
    assert_eq!(ids.get(0), Some("7"));
    assert_eq!(ids.get(1), Some("8"));
}
