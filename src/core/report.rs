use crate::domain::model::{Course, ReportLine, Roster, StudentReport};

/// Arithmetic mean of a course's grades, or `None` when the course has
/// no entries. Never produces NaN.
pub fn course_average(course: &Course) -> Option<f64> {
    if course.entries.is_empty() {
        return None;
    }
    let total: u32 = course.entries.iter().map(|e| u32::from(e.grade)).sum();
    Some(f64::from(total) / course.entries.len() as f64)
}

/// Mean grade across every entry, in every course, whose name matches
/// exactly (case-sensitive, whole string). `0.0` when nothing matches.
pub fn student_average(name: &str, roster: &Roster) -> f64 {
    let mut total = 0u32;
    let mut count = 0u32;
    for course in &roster.courses {
        for entry in course.entries.iter().filter(|e| e.name == name) {
            total += u32::from(entry.grade);
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        f64::from(total) / f64::from(count)
    }
}

/// Collects every (course, grade) pair for `name` in course-then-entry
/// file order, with the found flag and the student average. Pure query.
pub fn report(name: &str, roster: &Roster) -> StudentReport {
    let mut entries = Vec::new();
    for course in &roster.courses {
        for entry in &course.entries {
            if entry.name == name {
                entries.push(ReportLine {
                    course: course.title.clone(),
                    grade: entry.grade,
                });
            }
        }
    }

    StudentReport {
        found: !entries.is_empty(),
        average: student_average(name, roster),
        entries,
    }
}
