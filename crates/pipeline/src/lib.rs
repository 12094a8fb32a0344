// pipeline crate
//
// Stages pass the result through unchanged in value; each one is only
// allowed to fire an external notification for its own variant.

use models::{Exam, ExamResult, ValidationError};

/// External notification seam. The pipeline guarantees the matching
/// hook fires exactly once per processed exam; what the hook does is up
/// to the caller.
pub trait Notifier {
    fn process_succeeded(&self, exam: &Exam);
    fn process_failed(&self, error: &ValidationError);
}

/// Notifier that writes through the logging crate: successes at info
/// level, failures as warnings.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn process_succeeded(&self, exam: &Exam) {
        logging::info(&format!(
            "success notification for student {}",
            exam.student().id()
        ));
    }

    fn process_failed(&self, error: &ValidationError) {
        logging::warning(&format!(
            "failure notification for student {}: {}",
            error.exam.student().id(),
            error.reason
        ));
    }
}

/// Fires the success hook when the result is `Ok`, then returns the
/// result untouched.
pub fn notify_success(result: ExamResult, notifier: &impl Notifier) -> ExamResult {
    if let Ok(exam) = &result {
        notifier.process_succeeded(exam);
    }
    result
}

/// Fires the failure hook when the result is `Err`, then returns the
/// result untouched.
pub fn notify_failure(result: ExamResult, notifier: &impl Notifier) -> ExamResult {
    if let Err(error) = &result {
        notifier.process_failed(error);
    }
    result
}

/// The full pipeline for one exam: validate, then both notification
/// stages. Stage order is immaterial since each acts on one variant.
pub fn process(exam: Exam, notifier: &impl Notifier) -> ExamResult {
    let result = validators::validate(exam);
    let result = notify_success(result, notifier);
    notify_failure(result, notifier)
}
