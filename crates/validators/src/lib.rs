// validators crate

mod exam;
mod student;

pub use exam::{check_class_room, check_mark, check_subject};
pub use student::{check_email, check_username};

use models::{Exam, ExamResult, ValidationError};

type Rule = fn(&Exam) -> Result<(), &'static str>;

// Order matters: the first violated rule decides the failure reason.
const RULES: [Rule; 5] = [
    check_username,
    check_email,
    check_subject,
    check_class_room,
    check_mark,
];

/// Checks an exam against the full rule set, short-circuiting on the
/// first violation. Never mutates the exam and never panics; a failure
/// is data, not an exception.
pub fn validate(exam: Exam) -> ExamResult {
    for rule in RULES {
        if let Err(reason) = rule(&exam) {
            return Err(ValidationError {
                reason: reason.to_string(),
                exam,
            });
        }
    }
    Ok(exam)
}

#[cfg(test)]
mod tests {
    use super::*;
    use generator::fixtures;

    #[test]
    fn valid_exam_passes_unchanged() {
        let exam = fixtures::valid_exam();
        let expected = exam.clone();

        let result = validate(exam);

        assert_eq!(result, Ok(expected));
    }

    #[test]
    fn missing_username_fails_first() {
        let result = validate(fixtures::exam_missing_username());

        let error = result.expect_err("username rule should fire");
        assert_eq!(error.reason, "Student username is not present");
    }

    #[test]
    fn first_rule_wins_when_everything_is_wrong() {
        // Username, email, subject, and class room are all missing and
        // the mark is out of range; only the username reason surfaces.
        let result = validate(fixtures::exam_all_invalid());

        let error = result.expect_err("validation should fail");
        assert_eq!(error.reason, "Student username is not present");
    }

    #[test]
    fn missing_email_fails_second() {
        let result = validate(fixtures::exam_missing_email());

        let error = result.expect_err("email rule should fire");
        assert_eq!(error.reason, "Student email is not present");
    }

    #[test]
    fn missing_subject_is_reported_after_student_checks() {
        let result = validate(fixtures::exam_missing_subject());

        let error = result.expect_err("subject rule should fire");
        assert_eq!(error.reason, "Subject not found");
    }

    #[test]
    fn missing_class_room_is_reported() {
        let result = validate(fixtures::exam_missing_class_room());

        let error = result.expect_err("class room rule should fire");
        assert_eq!(error.reason, "ClassRoom not found");
    }

    #[test]
    fn mark_boundaries_are_inclusive() {
        assert!(validate(fixtures::exam_with_mark(0)).is_ok());
        assert!(validate(fixtures::exam_with_mark(10)).is_ok());

        for mark in [-1, 11] {
            let error = validate(fixtures::exam_with_mark(mark))
                .expect_err("mark rule should fire");
            assert_eq!(error.reason, "Marks not acceptable");
        }
    }

    #[test]
    fn failure_carries_the_offending_exam() {
        let exam = fixtures::exam_missing_subject();
        let expected = exam.clone();

        let error = validate(exam).expect_err("subject rule should fire");
        assert_eq!(error.exam, expected);
    }
}
