//! Tests for table assembly and the conversion pipeline

use std::fs;
use tempfile::TempDir;

use super::assembler::assemble;
use super::pipeline::TableConverter;
use crate::Error;
use crate::app::models::{FormattedCell, RawTable, SubgroupRange};
use crate::config::Config;
use crate::constants::MISSING_VALUE_MARKER;

fn raw(rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

fn config_for(temp_dir: &TempDir, csv: &str) -> Config {
    let input_path = temp_dir.path().join("input.csv");
    fs::write(&input_path, csv).unwrap();

    let mut config = Config::default();
    config.input.path = input_path;
    config.output.path = temp_dir.path().join("output.tex");
    config
}

#[test]
fn test_rows_are_padded_to_widest() {
    let table = raw(&[&["a", "b", "c"], &["1", "2", "3", "4", "5"], &["x", "y"]]).normalize();

    assert_eq!(table.ncols(), 5);
    assert_eq!(table.len(), 3);
    assert!(table.rows().iter().all(|row| row.len() == 5));
    assert_eq!(table.rows()[0][3..], ["", ""]);
    assert_eq!(table.rows()[2][2..], ["", "", ""]);
}

#[test]
fn test_assemble_rejects_too_few_rows() {
    let result = assemble(raw(&[&["only", "row"]]), 2);

    match result {
        Err(Error::InsufficientRows { rows, header_lines }) => {
            assert_eq!(rows, 1);
            assert_eq!(header_lines, 2);
        }
        other => panic!("Expected InsufficientRows, got {:?}", other),
    }
}

#[test]
fn test_assemble_header_only_table() {
    let assembled = assemble(raw(&[&["A", "B"], &["a", "b"]]), 2).unwrap();

    assert_eq!(assembled.header_rows.len(), 2);
    assert!(assembled.data_rows.is_empty());
}

#[test]
fn test_assemble_splits_and_escapes() {
    let assembled = assemble(
        raw(&[
            &["Ref", "Methods", "Predicted variables", "", ""],
            &["", "", "a", "b", "c"],
            &["R1", "Fit & test", "1", "", "50%"],
        ]),
        2,
    )
    .unwrap();

    assert_eq!(assembled.ncols, 5);
    assert_eq!(assembled.header_rows.len(), 2);
    assert_eq!(assembled.header_rows[1][0], FormattedCell::Blank);
    assert_eq!(
        assembled.data_rows,
        vec![vec!["R1", r"Fit \& test", "1", MISSING_VALUE_MARKER, r"50\%"]]
    );
}

#[test]
fn test_assemble_places_rule_for_new_subgroup() {
    let assembled = assemble(
        raw(&[&["Ref", "Group", ""], &["", "", "b"], &["1", "2", "3"]]),
        2,
    )
    .unwrap();

    // Column 2 is blank in the first header row, so "b" opens a subgroup
    assert_eq!(
        assembled.header_rows[1][2].rule(),
        Some(SubgroupRange::new(0, 1))
    );
    assert_eq!(assembled.partial_rules(), 1);
}

#[test]
fn test_convert_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(
        &temp_dir,
        "Name,Value,Unit\n,measured,\nalpha,1.5,m\nbeta,,s\n",
    );

    let summary = TableConverter::new().convert(&config).unwrap();

    assert_eq!(summary.encoding, "UTF-8");
    assert_eq!(summary.columns, 3);
    assert_eq!(summary.header_rows, 2);
    assert_eq!(summary.data_rows, 2);
    assert_eq!(summary.output_path, config.output.path);

    let output = fs::read_to_string(&config.output.path).unwrap();
    assert_eq!(summary.bytes_written, output.len());

    let data_section = output
        .split("\\endlastfoot\n\n")
        .nth(1)
        .and_then(|rest| rest.split("\\end{longtable}").next())
        .unwrap();
    let data_lines: Vec<&str> = data_section.lines().collect();

    assert_eq!(
        data_lines,
        vec![
            "alpha & 1.5 & m \\\\",
            format!("beta & {} & s \\\\", MISSING_VALUE_MARKER).as_str(),
        ]
    );
    assert!(output.starts_with("\\begin{landscape}\n"));
    assert!(output.contains("\\caption{Controller Configurations Summary}\n"));
}

#[test]
fn test_convert_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.input.path = temp_dir.path().join("absent.csv");
    config.output.path = temp_dir.path().join("output.tex");

    let result = TableConverter::new().convert(&config);

    assert!(matches!(result, Err(Error::InputNotFound { .. })));
    assert!(!config.output.path.exists());
}

#[test]
fn test_convert_insufficient_rows_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = config_for(&temp_dir, "A,B\n");
    config.table.header_lines = 3;

    let result = TableConverter::new().convert(&config);

    assert!(matches!(result, Err(Error::InsufficientRows { .. })));
    assert!(!config.output.path.exists());
}

#[test]
fn test_convert_empty_input_is_decode_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "");

    let result = TableConverter::new().convert(&config);

    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[test]
fn test_blank_line_counts_as_header_row() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "A,B\n\n1,2\n");

    let summary = TableConverter::new().convert(&config).unwrap();
    let document = fs::read_to_string(&config.output.path).unwrap();

    assert_eq!(summary.header_rows, 2);
    assert_eq!(summary.data_rows, 1);
    assert!(document.contains("A & B \\\\\n &  \\\\\n\\bottomrule"));
    assert!(document.contains("\\endlastfoot\n\n1 & 2 \\\\\n\\end{longtable}"));
}
