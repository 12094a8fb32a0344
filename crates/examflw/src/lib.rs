// examflw library: wires the generator and the pipeline together so
// the binary and the integration tests share one entry point.

use models::ExamResult;
use pipeline::Notifier;
use rand::Rng;

/// Generates `students` dummy students and runs every one of their
/// exams through the validation pipeline, in generation order.
pub fn process_cohort(
    students: u32,
    rng: &mut impl Rng,
    notifier: &impl Notifier,
) -> Vec<ExamResult> {
    generator::dummy_cohort(students, rng)
        .into_iter()
        .map(|exam| pipeline::process(exam, notifier))
        .collect()
}
