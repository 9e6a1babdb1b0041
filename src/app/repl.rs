use crate::core::report::{course_average, report};
use crate::domain::model::{Diagnostic, Roster};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Case-sensitive sentinel ending the query loop.
pub const STOP_SENTINEL: &str = "stop";

/// Asks for the roster filename and reads one whitespace-delimited
/// token, the way the prompt-driven flow expects it.
pub fn prompt_filename<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(
        output,
        "Please enter the filename containing course information (e.g., student_db.txt): "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.split_whitespace().next().unwrap_or("").to_string())
}

/// Echoes parse diagnostics to the user, in input order.
pub fn print_diagnostics<W: Write>(diagnostics: &[Diagnostic], output: &mut W) -> Result<()> {
    for diagnostic in diagnostics {
        writeln!(output, "{}", diagnostic)?;
    }
    Ok(())
}

/// Repeatedly prompts for a student name and prints that student's
/// report, until the stop sentinel or end of input.
pub fn run_query_loop<R: BufRead, W: Write>(
    roster: &Roster,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        write!(
            output,
            "\nEnter student's full name (e.g., Sarah Johnson) or 'stop' to exit: "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let name = line
            .trim_start()
            .trim_end_matches('\n')
            .trim_end_matches('\r');
        if name.is_empty() {
            continue;
        }
        if name == STOP_SENTINEL {
            break;
        }

        print_student_report(name, roster, output)?;
    }
    Ok(())
}

pub fn print_student_report<W: Write>(name: &str, roster: &Roster, output: &mut W) -> Result<()> {
    let summary = report(name, roster);

    writeln!(output, "\nReport for {}:", name)?;
    writeln!(output, "{:<25} {}", "Course", "Grade")?;
    writeln!(output, "------------------------- ------")?;
    for line in &summary.entries {
        writeln!(output, "{:<25} {}", line.course, line.grade)?;
    }
    if !summary.found {
        writeln!(output, "No courses found for student {}", name)?;
    }
    writeln!(
        output,
        "Average grade for student {}: {:.2}",
        name, summary.average
    )?;
    Ok(())
}

/// Prints every course's average after the query loop ends. A course
/// that ended up with no entries reports "no students" instead of a
/// number.
pub fn print_course_summary<W: Write>(roster: &Roster, output: &mut W) -> Result<()> {
    for course in &roster.courses {
        match course_average(course) {
            Some(average) => writeln!(
                output,
                "Average grade for course {}: {:.2}",
                course.title, average
            )?,
            None => writeln!(
                output,
                "Average grade for course {}: no students",
                course.title
            )?,
        }
    }
    Ok(())
}
