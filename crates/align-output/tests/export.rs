//! Exported workbooks read back with calamine.

use std::path::Path;

use align_output::{
    ALIGNED_FILE, ALIGNED_SHEET, NOT_FOUND_FILE, NOT_FOUND_SHEET, export_table, write_outputs,
};
use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

fn read_back(path: &Path) -> (Vec<String>, Vec<Vec<Data>>) {
    let mut workbook = open_workbook_auto(path).unwrap();
    let sheets = workbook.sheet_names();
    let range = workbook.worksheet_range(&sheets[0]).unwrap();
    let rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();
    (sheets, rows)
}

fn aligned_table() -> DataFrame {
    let columns: Vec<Column> = vec![
        Series::new("ID".into(), vec!["", ""]).into_column(),
        Series::new("Name".into(), vec!["Ann", "Bo"]).into_column(),
        Series::new("Age".into(), vec![Some(31i64), None]).into_column(),
        Series::new("Active".into(), vec![Some(true), Some(false)]).into_column(),
    ];
    DataFrame::new(columns).unwrap()
}

#[test]
fn aligned_file_has_header_row_and_typed_cells() {
    let dir = tempfile::tempdir().unwrap();
    let paths = write_outputs(dir.path(), &aligned_table(), &[]).unwrap();

    assert_eq!(paths.aligned, dir.path().join(ALIGNED_FILE));
    let (sheets, rows) = read_back(&paths.aligned);

    assert_eq!(sheets, vec![ALIGNED_SHEET.to_string()]);
    assert_eq!(
        rows[0],
        vec![
            Data::String("ID".into()),
            Data::String("Name".into()),
            Data::String("Age".into()),
            Data::String("Active".into()),
        ]
    );
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][1], Data::String("Ann".into()));
    assert_eq!(rows[1][2], Data::Float(31.0));
    assert_eq!(rows[1][3], Data::Bool(true));
    assert_eq!(rows[2][2], Data::Empty);
    assert_eq!(rows[2][3], Data::Bool(false));
}

#[test]
fn unmatched_columns_get_their_own_file() {
    let dir = tempfile::tempdir().unwrap();
    let unmatched = vec!["Phone".to_string(), "Fax".to_string()];

    let paths = write_outputs(dir.path(), &aligned_table(), &unmatched).unwrap();

    let not_found = paths.not_found.unwrap();
    assert_eq!(not_found, dir.path().join(NOT_FOUND_FILE));
    let (sheets, rows) = read_back(&not_found);
    assert_eq!(sheets, vec![NOT_FOUND_SHEET.to_string()]);
    assert_eq!(
        rows,
        vec![
            vec![Data::String(NOT_FOUND_SHEET.into())],
            vec![Data::String("Phone".into())],
            vec![Data::String("Fax".into())],
        ]
    );
}

#[test]
fn output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("out").join("jan");

    let paths = write_outputs(&output_dir, &aligned_table(), &[]).unwrap();

    assert!(paths.aligned.starts_with(&output_dir));
    assert!(paths.aligned.is_file());
}

#[test]
fn in_memory_export_matches_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("buffer.xlsx");
    let bytes = export_table(&aligned_table(), ALIGNED_SHEET).unwrap();
    std::fs::write(&path, bytes).unwrap();

    let (_, rows) = read_back(&path);
    assert_eq!(rows[2][1], Data::String("Bo".into()));
}
