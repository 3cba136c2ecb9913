use category_totals::ingestion::csv::{load_table_from_path, load_table_from_reader, reader_builder};
use category_totals::types::Cell;
use category_totals::PipelineError;

#[test]
fn load_table_from_path_happy_path() {
    let t = load_table_from_path("tests/fixtures/scenario_a.csv", b',').unwrap();

    assert_eq!(t.columns, vec!["Category", "Value"]);
    assert_eq!(t.row_count(), 4);
    assert_eq!(
        t.rows[2],
        vec![Cell::Text("B".to_string()), Cell::Text("N/A".to_string())]
    );
}

#[test]
fn load_table_keeps_extra_columns() {
    let t = load_table_from_path("tests/fixtures/extra_columns.csv", b',').unwrap();
    assert_eq!(t.columns, vec!["Region", "Category", "Value", "Note"]);
    assert_eq!(t.rows[1][3], Cell::Missing);
}

#[test]
fn load_table_reports_missing_file_with_path() {
    let err = load_table_from_path("tests/fixtures/does_not_exist.csv", b',').unwrap_err();
    match &err {
        PipelineError::FileNotFound { path } => {
            assert!(path.ends_with("does_not_exist.csv"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("does_not_exist.csv"));
}

#[test]
fn load_table_empty_file_names_path() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = load_table_from_path(file.path(), b',').unwrap_err();
    match err {
        PipelineError::EmptyInput { path } => assert_eq!(path, file.path()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn load_table_from_reader_preserves_text_verbatim() {
    let input = "Category,Value\n\" a \",10\n";
    let mut rdr = reader_builder(b',').from_reader(input.as_bytes());
    let t = load_table_from_reader(&mut rdr).unwrap();
    assert_eq!(t.rows[0][0], Cell::Text(" a ".to_string()));
}

#[test]
fn load_table_rejects_ragged_rows() {
    let err = load_table_from_path("tests/fixtures/ragged.csv", b',').unwrap_err();
    assert!(matches!(err, PipelineError::Csv(_)));
}
