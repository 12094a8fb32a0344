//! Deterministic exam fixtures for tests across the workspace.

use models::{ClassRoom, Exam, ExamBuilder, Student};
use std::sync::Arc;

pub fn class_room() -> Arc<ClassRoom> {
    Arc::new(ClassRoom::new("id_class", "CLASS 1"))
}

/// Fully populated student; passes the username and email rules.
pub fn valid_student() -> Arc<Student> {
    Arc::new(
        Student::with_id(1, class_room())
            .first_name("student_f_1")
            .last_name("student_l_1")
            .username("student_u_1")
            .email("student_e_1@school.org")
            .build(),
    )
}

fn exam_for(student: Arc<Student>) -> ExamBuilder {
    let room = Arc::clone(student.class_room());
    Exam::of(student).class_room(room).subject("MATH").mark(7)
}

/// Passes every validation rule.
pub fn valid_exam() -> Exam {
    exam_for(valid_student()).build()
}

pub fn exam_with_mark(mark: i32) -> Exam {
    exam_for(valid_student()).mark(mark).build()
}

pub fn exam_missing_username() -> Exam {
    let student = Arc::new(
        Student::with_id(2, class_room())
            .first_name("student_f_2")
            .last_name("student_l_2")
            .email("student_e_2@school.org")
            .build(),
    );
    exam_for(student).build()
}

pub fn exam_missing_email() -> Exam {
    let student = Arc::new(
        Student::with_id(3, class_room())
            .first_name("student_f_3")
            .last_name("student_l_3")
            .username("student_u_3")
            .build(),
    );
    exam_for(student).build()
}

pub fn exam_missing_subject() -> Exam {
    Exam::of(valid_student())
        .class_room(class_room())
        .mark(7)
        .build()
}

pub fn exam_missing_class_room() -> Exam {
    Exam::of(valid_student()).subject("MATH").mark(7).build()
}

/// Violates every rule at once; only the first reason should surface.
pub fn exam_all_invalid() -> Exam {
    let student = Arc::new(Student::with_id(4, class_room()).build());
    Exam::of(student).mark(11).build()
}
