// reporter crate

use colored::*;
use models::{Exam, ExamResult};
use serde_json::{json, Value};

// An absent username or subject renders as "unknown" rather than a
// placeholder like "null"; failure lines stay readable either way.
fn username(exam: &Exam) -> &str {
    exam.student().username().unwrap_or("unknown")
}

fn subject(exam: &Exam) -> &str {
    exam.subject().unwrap_or("unknown")
}

/// Renders the one-line message for a processed exam.
pub fn report(result: &ExamResult) -> String {
    match result {
        Ok(exam) => format!(
            "process succeeded for {} subject {}",
            username(exam),
            subject(exam)
        ),
        Err(error) => format!(
            "process failed for {} subject {} reason {}",
            username(&error.exam),
            subject(&error.exam),
            error.reason
        ),
    }
}

/// Machine-readable rendering, one JSON object per exam.
pub fn report_json(result: &ExamResult) -> Value {
    match result {
        Ok(exam) => json!({
            "status": "succeeded",
            "student": exam.student().username(),
            "subject": exam.subject(),
            "mark": exam.mark(),
        }),
        Err(error) => json!({
            "status": "failed",
            "student": error.exam.student().username(),
            "subject": error.exam.subject(),
            "reason": error.reason,
        }),
    }
}

pub fn print_result(result: &ExamResult) {
    match result {
        Ok(_) => println!("{} {}", "✓".green(), report(result)),
        Err(_) => println!("{} {}", "✗".red(), report(result)),
    }
}

pub fn print_summary(results: &[ExamResult]) {
    let passed = results.iter().filter(|result| result.is_ok()).count();
    let failed = results.len() - passed;

    println!();
    println!("Processed {} exams", results.len());
    println!("  {}", format!("{} passed", passed).green());
    if failed > 0 {
        println!("  {}", format!("{} failed", failed).red());
    }
}
