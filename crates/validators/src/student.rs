use models::Exam;

pub fn check_username(exam: &Exam) -> Result<(), &'static str> {
    match exam.student().username() {
        Some(username) if !username.is_empty() => Ok(()),
        _ => Err("Student username is not present"),
    }
}

pub fn check_email(exam: &Exam) -> Result<(), &'static str> {
    match exam.student().email() {
        Some(email) if !email.is_empty() => Ok(()),
        _ => Err("Student email is not present"),
    }
}
