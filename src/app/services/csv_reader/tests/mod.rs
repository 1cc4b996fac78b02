//! Tests for encoding detection, candidate decoding and the fallback loop

use encoding_rs::{UTF_8, UTF_16LE, WINDOWS_1252};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::decoding::{DecodeAttempt, decode_candidate, parse_csv};
use super::detection::{candidate_encodings, detect_encoding};
use super::reader::CsvReader;
use crate::Error;
use crate::app::models::AttemptOutcome;
use crate::constants::FALLBACK_ENCODING_LABELS;

/// Encode text as UTF-16LE with a byte-order mark
fn utf16le_with_bom(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

#[test]
fn test_detect_ascii_as_default() {
    assert_eq!(detect_encoding(b"a,b,c\n1,2,3\n"), UTF_8);
    assert_eq!(detect_encoding(b""), UTF_8);
}

#[test]
fn test_detect_bom() {
    assert_eq!(detect_encoding(&utf16le_with_bom("a,b")), UTF_16LE);
    assert_eq!(detect_encoding(b"\xEF\xBB\xBFa,b"), UTF_8);
}

#[test]
fn test_detect_utf8_text() {
    let sample = "Größe,Maß,Ökonomie\nÄpfel,Übung,Straße\n".repeat(20);
    assert_eq!(detect_encoding(sample.as_bytes()), UTF_8);
}

#[test]
fn test_candidates_deduplicate_aliases() {
    let candidates = candidate_encodings(UTF_8, FALLBACK_ENCODING_LABELS);
    let labels: Vec<_> = candidates.iter().map(|c| c.label).collect();
    let encodings: Vec<_> = candidates.iter().map(|c| c.encoding).collect();

    assert_eq!(labels, vec!["UTF-8", "latin1", "utf-16"]);
    assert_eq!(encodings, vec![UTF_8, WINDOWS_1252, UTF_16LE]);
}

#[test]
fn test_candidates_detected_first() {
    let candidates = candidate_encodings(WINDOWS_1252, FALLBACK_ENCODING_LABELS);
    let labels: Vec<_> = candidates.iter().map(|c| c.label).collect();

    assert_eq!(labels, vec!["windows-1252", "utf-16"]);
}

#[test]
fn test_candidates_skip_unknown_labels() {
    let candidates = candidate_encodings(UTF_8, &["not-an-encoding", "latin1"]);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[1].encoding, WINDOWS_1252);
}

#[test]
fn test_decode_malformed_utf8() {
    let attempt = decode_candidate(b"Caf\xE9,x\n", UTF_8);
    assert!(matches!(attempt, DecodeAttempt::Malformed));
    assert_eq!(attempt.outcome(), AttemptOutcome::Malformed);
}

#[test]
fn test_decode_latin1() {
    match decode_candidate(b"Caf\xE9,x\n", WINDOWS_1252) {
        DecodeAttempt::Decoded(table) => assert_eq!(table.rows, vec![vec!["Café", "x"]]),
        other => panic!("Expected decoded rows, got {:?}", other),
    }
}

#[test]
fn test_decode_empty_input() {
    assert!(matches!(decode_candidate(b"", UTF_8), DecodeAttempt::Empty));
}

#[test]
fn test_parse_csv_ragged_and_quoted() {
    let table = parse_csv("a,b,c\n\"x, y\",\"multi\nline\"\n1\n").unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.rows[0], vec!["a", "b", "c"]);
    assert_eq!(table.rows[1], vec!["x, y", "multi\nline"]);
    assert_eq!(table.rows[2], vec!["1"]);
    assert_eq!(table.max_columns(), 3);
}

#[test]
fn test_parse_csv_keeps_blank_lines_as_empty_rows() {
    let table = parse_csv("A,B\n\n1,2\r\n\r\n3,4\n\n").unwrap();

    assert_eq!(table.len(), 6);
    assert_eq!(table.rows[0], vec!["A", "B"]);
    assert!(table.rows[1].is_empty());
    assert_eq!(table.rows[2], vec!["1", "2"]);
    assert!(table.rows[3].is_empty());
    assert_eq!(table.rows[4], vec!["3", "4"]);
    assert!(table.rows[5].is_empty());
}

#[test]
fn test_parse_csv_blank_line_inside_quoted_field() {
    let table = parse_csv("a,\"first\n\nthird\"\nb,c\n").unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0], vec!["a", "first\n\nthird"]);
    assert_eq!(table.rows[1], vec!["b", "c"]);
}

#[test]
fn test_resolve_falls_back_after_malformed_detection() {
    // UTF-8 byte-order mark followed by a Latin-1 byte
    let bytes = b"\xEF\xBB\xBFName,Caf\xE9\n1,2\n";
    let resolved = CsvReader::new()
        .resolve_bytes(Path::new("mixed.csv"), bytes)
        .unwrap();

    assert_eq!(resolved.detected_encoding, "UTF-8");
    assert_eq!(resolved.encoding, "windows-1252");
    assert_eq!(resolved.attempts.len(), 2);
    assert_eq!(resolved.attempts[0].outcome, AttemptOutcome::Malformed);
    assert_eq!(resolved.attempts[1].label, "latin1");
    assert!(resolved.attempts[1].outcome.is_success());
    assert_eq!(resolved.table.rows[0][1], "Café");
    assert_eq!(resolved.table.len(), 2);
}

#[test]
fn test_resolve_utf16_with_bom() {
    let bytes = utf16le_with_bom("Ref,Größe\nA,1\n");
    let resolved = CsvReader::new()
        .resolve_bytes(Path::new("wide.csv"), &bytes)
        .unwrap();

    assert_eq!(resolved.encoding, "UTF-16LE");
    assert_eq!(resolved.table.rows[0], vec!["Ref", "Größe"]);
}

#[test]
fn test_resolve_empty_file_fails_with_every_attempt() {
    let result = CsvReader::new().resolve_bytes(Path::new("empty.csv"), b"");

    match result {
        Err(Error::Decode {
            path,
            detected_encoding,
            attempts,
        }) => {
            assert_eq!(path, Path::new("empty.csv"));
            assert_eq!(detected_encoding, "UTF-8");
            assert_eq!(attempts.len(), 3);
            assert!(attempts.iter().all(|a| a.outcome == AttemptOutcome::Empty));
        }
        other => panic!("Expected Decode error, got {:?}", other),
    }
}

#[test]
fn test_resolve_custom_fallbacks() {
    let reader = CsvReader::new().with_fallback_labels(&[]);
    let result = reader.resolve_bytes(Path::new("bad.csv"), b"\xEF\xBB\xBF\xFF\n");

    match result {
        Err(Error::Decode { attempts, .. }) => assert_eq!(attempts.len(), 1),
        other => panic!("Expected Decode error, got {:?}", other),
    }
}

#[test]
fn test_resolve_missing_file() {
    let result = CsvReader::new().resolve(Path::new("/nonexistent/input.csv"));
    assert!(matches!(result, Err(Error::InputNotFound { .. })));
}

#[test]
fn test_resolve_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "A,,B\n1,2\n").unwrap();

    let resolved = CsvReader::new().resolve(file.path()).unwrap();

    assert_eq!(resolved.encoding, "UTF-8");
    assert_eq!(resolved.table.rows, vec![vec!["A", "", "B"], vec!["1", "2"]]);
}
