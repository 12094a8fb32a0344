use models::Exam;

pub fn check_subject(exam: &Exam) -> Result<(), &'static str> {
    if exam.subject().is_some() {
        Ok(())
    } else {
        Err("Subject not found")
    }
}

pub fn check_class_room(exam: &Exam) -> Result<(), &'static str> {
    if exam.class_room().is_some() {
        Ok(())
    } else {
        Err("ClassRoom not found")
    }
}

// Valid marks are exactly 0..=10; both boundaries are acceptable.
pub fn check_mark(exam: &Exam) -> Result<(), &'static str> {
    if (0..=10).contains(&exam.mark()) {
        Ok(())
    } else {
        Err("Marks not acceptable")
    }
}
