use crate::domain::model::{
    Course, Diagnostic, DiagnosticKind, Entry, ParseOutcome, Roster, RosterLimits,
};

/// Line-oriented roster parser.
///
/// Consumes the lines of one input file in a single forward pass and
/// produces the roster plus one diagnostic per rejected line. Malformed
/// lines never abort the pass; the only early stop is a course header
/// arriving when the roster is already at capacity.
pub struct RosterParser {
    limits: RosterLimits,
}

// Accumulator threaded through the pass. `current` indexes the course
// that student lines attach to.
#[derive(Default)]
struct ParseState {
    roster: Roster,
    diagnostics: Vec<Diagnostic>,
    current: Option<usize>,
}

impl RosterParser {
    pub fn new(limits: RosterLimits) -> Self {
        Self { limits }
    }

    pub fn parse_str(&self, text: &str) -> ParseOutcome {
        self.parse(text.lines())
    }

    pub fn parse<'a, I>(&self, lines: I) -> ParseOutcome
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = ParseState::default();

        for (idx, raw) in lines.into_iter().enumerate() {
            let line_number = idx + 1;
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            if line.trim().is_empty() {
                continue;
            }

            if line.starts_with('[') {
                if !self.begin_course(&mut state, line_number, line) {
                    break;
                }
            } else if let Some(current) = state.current {
                let course = &mut state.roster.courses[current];
                if let Some(kind) = self.accept_entry(line, course) {
                    state.diagnostics.push(Diagnostic {
                        line: line_number,
                        kind,
                    });
                }
            } else {
                state.diagnostics.push(Diagnostic {
                    line: line_number,
                    kind: DiagnosticKind::OutOfOrderData,
                });
            }
        }

        ParseOutcome {
            roster: state.roster,
            diagnostics: state.diagnostics,
        }
    }

    /// Handles a `[Title]` header line. Returns `false` to stop the
    /// whole pass (roster already holds the maximum number of courses).
    fn begin_course(&self, state: &mut ParseState, line_number: usize, line: &str) -> bool {
        if state.roster.courses.len() >= self.limits.max_courses {
            state.diagnostics.push(Diagnostic {
                line: line_number,
                kind: DiagnosticKind::CoursesFull,
            });
            return false;
        }

        // Title runs up to the first `]`; a header without one takes
        // the rest of the line. Everything after `]` is ignored.
        let rest = &line[1..];
        let raw_title = rest.split(']').next().unwrap_or(rest);
        let title = truncate_field(raw_title, self.limits.max_field_len);
        if title.is_empty() {
            state.diagnostics.push(Diagnostic {
                line: line_number,
                kind: DiagnosticKind::MalformedLine,
            });
            return true;
        }

        state.roster.courses.push(Course {
            title: title.to_string(),
            entries: Vec::new(),
        });
        state.current = Some(state.roster.courses.len() - 1);
        true
    }

    /// Tries to add one `<name>: <grade>` line to `course`. Returns the
    /// diagnostic kind when the line is rejected.
    fn accept_entry(&self, line: &str, course: &mut Course) -> Option<DiagnosticKind> {
        let Some((name, grade)) = split_student_line(line) else {
            return Some(DiagnosticKind::MalformedLine);
        };
        if !is_valid_grade(grade) {
            return Some(DiagnosticKind::InvalidGrade(grade));
        }
        if course.entries.len() >= self.limits.max_students_per_course {
            return Some(DiagnosticKind::StudentsFull);
        }

        course.entries.push(Entry {
            name: truncate_field(name, self.limits.max_field_len).to_string(),
            grade: grade as u8,
        });
        None
    }
}

fn is_valid_grade(grade: i64) -> bool {
    (0..=5).contains(&grade)
}

/// Splits a student line into its name and grade fields. The shape is
/// `<name>` (non-empty, up to the first colon), the literal `": "`,
/// then an integer; text after the integer is ignored.
fn split_student_line(line: &str) -> Option<(&str, i64)> {
    let (name, rest) = line.split_once(':')?;
    if name.is_empty() {
        return None;
    }
    let rest = rest.strip_prefix(' ')?;
    let grade = parse_leading_int(rest)?;
    Some((name, grade))
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let token = &s[..end];
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Truncates to at most `max` characters, on a character boundary.
fn truncate_field(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
