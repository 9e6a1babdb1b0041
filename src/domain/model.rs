use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_COURSES: usize = 10;
pub const DEFAULT_MAX_STUDENTS_PER_COURSE: usize = 50;
pub const DEFAULT_MAX_FIELD_LEN: usize = 100;

/// One student's grade within a single course. Grades are validated to
/// the 0-5 range at parse time; an `Entry` never holds anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub grade: u8,
}

/// A course and its entries, in file order. Duplicate names are kept
/// as-is; no de-duplication happens anywhere in the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub entries: Vec<Entry>,
}

/// The full parsed collection of courses for one input file. Built once
/// by the parser and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub courses: Vec<Course>,
}

/// Capacity bounds applied while parsing. Field lengths count
/// characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterLimits {
    pub max_courses: usize,
    pub max_students_per_course: usize,
    pub max_field_len: usize,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            max_courses: DEFAULT_MAX_COURSES,
            max_students_per_course: DEFAULT_MAX_STUDENTS_PER_COURSE,
            max_field_len: DEFAULT_MAX_FIELD_LEN,
        }
    }
}

/// Why a single input line was rejected or cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("Incorrectly formatted student data.")]
    MalformedLine,
    #[error("Invalid grade.")]
    InvalidGrade(i64),
    #[error("Maximum number of courses reached.")]
    CoursesFull,
    #[error("Maximum number of students for a course reached.")]
    StudentsFull,
    #[error("Student data found before course title.")]
    OutOfOrderData,
}

/// A non-fatal report about one malformed or rejected input line.
/// `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            // Capacity overflows carry no line number in the output.
            DiagnosticKind::CoursesFull | DiagnosticKind::StudentsFull => {
                write!(f, "Error: {}", self.kind)
            }
            _ => write!(f, "Error on line {}: {}", self.line, self.kind),
        }
    }
}

/// Everything one parse pass produces: the roster plus every
/// diagnostic, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub roster: Roster,
    pub diagnostics: Vec<Diagnostic>,
}

/// One matching (course, grade) row of a student report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub course: String,
    pub grade: u8,
}

/// Result of a student lookup across the whole roster.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentReport {
    pub entries: Vec<ReportLine>,
    pub found: bool,
    pub average: f64,
}
