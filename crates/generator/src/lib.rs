// generator crate
//
// Dummy-data generation is a test-data concern, kept out of the
// validation core. Everything goes through a caller-supplied `Rng`, so
// a seeded `StdRng` makes a whole run reproducible.

pub mod fixtures;

use models::{ClassRoom, Exam, Student};
use rand::Rng;
use std::sync::Arc;

// Could be fetched from a registry one day; a fixed list is enough here.
pub const SUBJECTS: [&str; 5] = ["MATH", "PHYSICS", "FRENCH", "ENGLISH", "CS"];

pub fn dummy_class_room() -> Arc<ClassRoom> {
    Arc::new(ClassRoom::new("id_class", "CLASS 1"))
}

/// Builds a dummy student. Username and email are each present with
/// probability one half, which is what exercises the first two
/// validation rules.
pub fn dummy_student(index: u32, class_room: Arc<ClassRoom>, rng: &mut impl Rng) -> Arc<Student> {
    let mut builder = Student::with_id(index, class_room)
        .first_name(format!("student_f_{index}"))
        .last_name(format!("student_l_{index}"));
    if rng.gen_bool(0.5) {
        builder = builder.username(format!("student_u_{index}"));
    }
    if rng.gen_bool(0.5) {
        builder = builder.email(format!("student_e_{index}@school.org"));
    }
    Arc::new(builder.build())
}

/// One exam per subject for the given student. The subject itself goes
/// missing half of the time to simulate incomplete records.
pub fn dummy_exams(student: &Arc<Student>, rng: &mut impl Rng) -> Vec<Exam> {
    SUBJECTS
        .iter()
        .map(|subject| {
            let mut builder = Exam::of(Arc::clone(student))
                .class_room(Arc::clone(student.class_room()))
                .mark(rng.gen_range(0..10));
            if rng.gen_bool(0.5) {
                builder = builder.subject(*subject);
            }
            builder.build()
        })
        .collect()
}

/// Generates `students` dummy students in one shared class room and
/// returns all of their exams, ready for the pipeline.
pub fn dummy_cohort(students: u32, rng: &mut impl Rng) -> Vec<Exam> {
    let class_room = dummy_class_room();
    let mut exams = Vec::new();
    for index in 0..students {
        let student = dummy_student(index, Arc::clone(&class_room), rng);
        exams.extend(dummy_exams(&student, rng));
    }
    exams
}
