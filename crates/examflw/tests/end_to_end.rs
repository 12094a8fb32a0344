use models::{ClassRoom, Exam, ExamResult, Student, ValidationError};
use pipeline::Notifier;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::sync::Arc;

#[derive(Default)]
struct Recorder {
    succeeded: Cell<usize>,
    failed: Cell<usize>,
}

impl Notifier for Recorder {
    fn process_succeeded(&self, _exam: &Exam) {
        self.succeeded.set(self.succeeded.get() + 1);
    }

    fn process_failed(&self, _error: &ValidationError) {
        self.failed.set(self.failed.get() + 1);
    }
}

fn alice(username: bool) -> Arc<Student> {
    let room = Arc::new(ClassRoom::new("id_class", "CLASS 1"));
    let mut builder = Student::with_id(1, room)
        .first_name("Alice")
        .last_name("Archer")
        .email("a@x.org");
    if username {
        builder = builder.username("alice");
    }
    Arc::new(builder.build())
}

fn math_exam(student: Arc<Student>) -> Exam {
    let room = Arc::clone(student.class_room());
    Exam::of(student)
        .class_room(room)
        .subject("MATH")
        .mark(7)
        .build()
}

#[test]
fn valid_exam_reports_success() {
    let recorder = Recorder::default();

    let result = pipeline::process(math_exam(alice(true)), &recorder);

    assert_eq!(
        reporter::report(&result),
        "process succeeded for alice subject MATH"
    );
    assert_eq!(recorder.succeeded.get(), 1);
    assert_eq!(recorder.failed.get(), 0);
}

#[test]
fn missing_username_reports_failure() {
    let recorder = Recorder::default();

    let result = pipeline::process(math_exam(alice(false)), &recorder);

    assert_eq!(
        reporter::report(&result),
        "process failed for unknown subject MATH reason Student username is not present"
    );
    assert_eq!(recorder.succeeded.get(), 0);
    assert_eq!(recorder.failed.get(), 1);
}

#[test]
fn cohort_results_match_the_exam_count() {
    let recorder = Recorder::default();
    let mut rng = StdRng::seed_from_u64(42);

    let results = examflw_lib::process_cohort(10, &mut rng, &recorder);

    assert_eq!(results.len(), 10 * generator::SUBJECTS.len());
    assert_eq!(
        recorder.succeeded.get() + recorder.failed.get(),
        results.len()
    );
}

#[test]
fn seeded_cohorts_are_reproducible() {
    let recorder = Recorder::default();
    let mut first = StdRng::seed_from_u64(7);
    let mut second = StdRng::seed_from_u64(7);

    let a: Vec<ExamResult> = examflw_lib::process_cohort(5, &mut first, &recorder);
    let b: Vec<ExamResult> = examflw_lib::process_cohort(5, &mut second, &recorder);

    assert_eq!(a, b);
}

#[test]
fn every_failure_reason_is_one_of_the_rule_reasons() {
    let recorder = Recorder::default();
    let mut rng = StdRng::seed_from_u64(1);
    let reasons = [
        "Student username is not present",
        "Student email is not present",
        "Subject not found",
        "ClassRoom not found",
        "Marks not acceptable",
    ];

    for result in examflw_lib::process_cohort(20, &mut rng, &recorder) {
        if let Err(error) = result {
            assert!(reasons.contains(&error.reason.as_str()), "{}", error.reason);
        }
    }
}
