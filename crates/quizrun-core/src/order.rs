//! Question ordering.

use rand::seq::SliceRandom;
use rand::{rng, Rng};

use crate::model::QuestionEntry;

/// Shuffle `questions` in place when `shuffle` is set; otherwise leave file
/// order untouched.
pub fn order(questions: &mut [QuestionEntry], shuffle: bool) {
    if shuffle {
        shuffle_questions(questions);
    }
}

/// Uniformly permute `questions` with a per-invocation, OS-seeded RNG.
pub fn shuffle_questions(questions: &mut [QuestionEntry]) {
    let mut rng = rng();
    shuffle_with(questions, &mut rng);
}

/// Uniformly permute `questions` using the given RNG (Fisher–Yates).
pub fn shuffle_with<R: Rng + ?Sized>(questions: &mut [QuestionEntry], rng: &mut R) {
    questions.shuffle(rng);
    tracing::debug!("shuffled {} question(s)", questions.len());
}
