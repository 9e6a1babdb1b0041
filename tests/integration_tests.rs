use gradebook::app::repl;
use gradebook::core::{DiagnosticKind, RosterLimits};
use gradebook::{AppConfig, LocalStorage, RosterEngine, RosterError};
use std::io::Cursor;
use tempfile::TempDir;

fn write_roster(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn default_config() -> AppConfig {
    AppConfig {
        input: None,
        limits: RosterLimits::default(),
    }
}

#[test]
fn test_end_to_end_roster_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(
        &temp_dir,
        "student_db.txt",
        "[Math]\nAlice: 3\nBob: 4\n\n[Science]\nAlice: 5\n",
    );

    let engine = RosterEngine::new(LocalStorage::new(), default_config());
    let outcome = engine.load_roster(&path).unwrap();

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.roster.courses.len(), 2);

    // Drive the interactive surface with in-memory buffers.
    let mut input = Cursor::new("Alice\nBob\nstop\n");
    let mut output = Vec::new();
    repl::run_query_loop(&outcome.roster, &mut input, &mut output).unwrap();
    repl::print_course_summary(&outcome.roster, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Report for Alice:"));
    assert!(text.contains("Average grade for student Alice: 4.00"));
    assert!(text.contains("Report for Bob:"));
    assert!(text.contains("Average grade for student Bob: 4.00"));
    assert!(text.contains("Average grade for course Math: 3.50"));
    assert!(text.contains("Average grade for course Science: 5.00"));
}

#[test]
fn test_malformed_lines_produce_diagnostics_but_keep_good_data() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(
        &temp_dir,
        "messy.txt",
        "Dana: 2\n[Math]\nAlice 3\nBob: 9\nCarol: 4\n",
    );

    let engine = RosterEngine::new(LocalStorage::new(), default_config());
    let outcome = engine.load_roster(&path).unwrap();

    let kinds: Vec<DiagnosticKind> = outcome.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::OutOfOrderData,
            DiagnosticKind::MalformedLine,
            DiagnosticKind::InvalidGrade(9),
        ]
    );
    let lines: Vec<usize> = outcome.diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![1, 3, 4]);

    // Only the well-formed entry made it in.
    assert_eq!(outcome.roster.courses.len(), 1);
    assert_eq!(outcome.roster.courses[0].entries.len(), 1);
    assert_eq!(outcome.roster.courses[0].entries[0].name, "Carol");
}

#[test]
fn test_missing_file_is_source_unavailable() {
    let engine = RosterEngine::new(LocalStorage::new(), default_config());
    let err = engine.load_roster("no_such_file.txt").unwrap_err();

    assert!(matches!(err, RosterError::SourceUnavailable { .. }));
}

#[test]
fn test_reparsing_the_same_file_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(&temp_dir, "roster.txt", "[Math]\nAlice: 3\nbroken\n");

    let engine = RosterEngine::new(LocalStorage::new(), default_config());
    let first = engine.load_roster(&path).unwrap();
    let second = engine.load_roster(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_prompted_filename_flow() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_roster(&temp_dir, "prompted.txt", "[Math]\nAlice: 3\n");

    let mut input = Cursor::new(format!("{}\n", path));
    let mut output = Vec::new();
    let filename = repl::prompt_filename(&mut input, &mut output).unwrap();
    assert_eq!(filename, path);

    let engine = RosterEngine::new(LocalStorage::new(), default_config());
    let outcome = engine.load_roster(&filename).unwrap();
    assert_eq!(outcome.roster.courses[0].entries.len(), 1);
}
