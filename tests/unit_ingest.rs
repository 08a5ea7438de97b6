// Unit tests for directory loading and row normalization.
//
// Loader tests use a temporary directory per test; normalization tests are
// pure.

use std::collections::BTreeMap;
use std::fs;

use examtopics::error::ExamTopicsError;
use examtopics::ingest::loader::{read_directory_files, RawRow};
use examtopics::ingest::normalize::{normalize_files, normalize_row};

const HEADER: &str = "Name,Part,Season,Year,SpecifiedTopic,Topic";

fn raw(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn full_row(specified: &str) -> RawRow {
    raw(&[
        ("Name", "T1"),
        ("Part", "A"),
        ("Season", "WS"),
        ("Year", "2020"),
        ("SpecifiedTopic", specified),
        ("Topic", "Arrays"),
    ])
}

// ============================================================
// normalize_row
// ============================================================

#[test]
fn normalize_splits_specified_topics() {
    let record = normalize_row(&full_row("Question, Loops, Recursion"), "a.csv", 1).unwrap();
    assert_eq!(record.name, "T1");
    assert_eq!(record.part, "A");
    assert_eq!(record.season, "WS");
    assert_eq!(record.year, "2020");
    assert_eq!(record.topic, "Arrays");
    assert_eq!(record.specified_topics, vec!["Question", "Loops", "Recursion"]);
}

#[test]
fn normalize_splits_only_on_comma_space() {
    let record = normalize_row(&full_row("Loops,Recursion"), "a.csv", 1).unwrap();
    assert_eq!(record.specified_topics, vec!["Loops,Recursion"]);
}

#[test]
fn normalize_empty_specified_topic_is_single_empty_tag() {
    let record = normalize_row(&full_row(""), "a.csv", 1).unwrap();
    assert_eq!(record.specified_topics, vec![""]);
}

#[test]
fn normalize_missing_column_is_malformed() {
    let mut row = full_row("Loops");
    row.remove("SpecifiedTopic");
    let err = normalize_row(&row, "exam.csv", 7).unwrap_err();
    match err {
        ExamTopicsError::MalformedRecord { file, row, column } => {
            assert_eq!(file, "exam.csv");
            assert_eq!(row, 7);
            assert_eq!(column, "SpecifiedTopic");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn normalize_ignores_extra_columns() {
    let mut row = full_row("Loops");
    row.insert("Points".to_string(), "12".to_string());
    assert!(normalize_row(&row, "a.csv", 1).is_ok());
}

#[test]
fn normalize_files_concatenates_in_file_order() {
    let mut files = BTreeMap::new();
    files.insert("b.csv".to_string(), vec![full_row("Sorting")]);
    files.insert("a.csv".to_string(), vec![full_row("Loops"), full_row("Recursion")]);
    let records = normalize_files(&files).unwrap();
    let tags: Vec<&str> = records
        .iter()
        .map(|r| r.specified_topics[0].as_str())
        .collect();
    assert_eq!(tags, vec!["Loops", "Recursion", "Sorting"]);
}

#[test]
fn normalize_files_stops_at_first_bad_row() {
    let mut bad = full_row("Loops");
    bad.remove("Year");
    let mut files = BTreeMap::new();
    files.insert("a.csv".to_string(), vec![full_row("Loops"), bad]);
    let err = normalize_files(&files).unwrap_err();
    assert!(matches!(
        err,
        ExamTopicsError::MalformedRecord { row: 2, column: "Year", .. }
    ));
}

// ============================================================
// read_directory_files
// ============================================================

#[tokio::test]
async fn loader_reads_every_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("2020.csv"),
        format!("{HEADER}\nT1,A,WS,2020,Loops,Arrays\nT2,B,WS,2020,Sorting,Algorithms\n"),
    )
    .unwrap();
    fs::write(
        dir.path().join("2021.csv"),
        format!("{HEADER}\nT1,A,SS,2021,\"Question, Loops\",Arrays\n"),
    )
    .unwrap();

    let files = read_directory_files(dir.path(), Some(b',')).await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files["2020.csv"].len(), 2);
    assert_eq!(files["2021.csv"][0]["SpecifiedTopic"], "Question, Loops");
    let names: Vec<&String> = files.keys().collect();
    assert_eq!(names, vec!["2020.csv", "2021.csv"]);
}

#[tokio::test]
async fn loader_honours_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("exam.csv"),
        "Name;Part;Season;Year;SpecifiedTopic;Topic\nT1;A;WS;2020;Loops, Recursion;Arrays\n",
    )
    .unwrap();

    let files = read_directory_files(dir.path(), Some(b';')).await.unwrap();
    assert_eq!(files["exam.csv"][0]["SpecifiedTopic"], "Loops, Recursion");
}

#[tokio::test]
async fn loader_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let files = read_directory_files(dir.path(), Some(b',')).await.unwrap();
    assert!(files.is_empty());
}

#[tokio::test]
async fn loader_skips_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("archive")).unwrap();
    fs::write(
        dir.path().join("exam.csv"),
        format!("{HEADER}\nT1,A,WS,2020,Loops,Arrays\n"),
    )
    .unwrap();

    let files = read_directory_files(dir.path(), Some(b',')).await.unwrap();
    assert_eq!(files.len(), 1);
    assert!(files.contains_key("exam.csv"));
}

#[tokio::test]
async fn loader_missing_directory_is_directory_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = read_directory_files(&missing, Some(b',')).await.unwrap_err();
    assert!(matches!(err, ExamTopicsError::DirectoryRead { .. }));
}

#[tokio::test]
async fn loader_without_delimiter_uses_semicolon() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("exam.csv"),
        "Name;Part;Season;Year;SpecifiedTopic;Topic\nT1;A;WS;2020;Loops, Recursion;Arrays\n",
    )
    .unwrap();

    let files = read_directory_files(dir.path(), None).await.unwrap();
    assert_eq!(files["exam.csv"][0]["Topic"], "Arrays");
    assert_eq!(files["exam.csv"][0]["SpecifiedTopic"], "Loops, Recursion");
}

#[tokio::test]
async fn loader_pads_short_rows() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("exam.csv"),
        format!("{HEADER},Notes\nT1,A,WS,2020,Loops,Arrays,easy\nT2,B,SS,2021,Loops,Arrays\n"),
    )
    .unwrap();

    let files = read_directory_files(dir.path(), Some(b',')).await.unwrap();
    let rows = &files["exam.csv"];
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Notes"], "easy");
    assert_eq!(rows[1]["Notes"], "");
    assert_eq!(rows[1]["Topic"], "Arrays");
}

#[tokio::test]
async fn loader_bad_file_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a_good.csv"),
        format!("{HEADER}\nT1,A,WS,2020,Loops,Arrays\n"),
    )
    .unwrap();
    fs::write(
        dir.path().join("b_bad.csv"),
        format!("{HEADER}\nT1,A,WS,2020,Loops,Arrays,extra\n"),
    )
    .unwrap();

    let err = read_directory_files(dir.path(), Some(b',')).await.unwrap_err();
    match err {
        ExamTopicsError::ExtraFields { file, row, .. } => {
            assert!(file.ends_with("b_bad.csv"));
            assert_eq!(row, 1);
        }
        other => panic!("expected ExtraFields, got {other:?}"),
    }
}

#[tokio::test]
async fn loader_unreadable_text_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut content = format!("{HEADER}\nT1,A,WS,2020,").into_bytes();
    content.extend_from_slice(b"\xff\xfe,Arrays\n");
    fs::write(dir.path().join("exam.csv"), content).unwrap();

    let err = read_directory_files(dir.path(), Some(b',')).await.unwrap_err();
    assert!(matches!(err, ExamTopicsError::FileParse { .. }));
}
