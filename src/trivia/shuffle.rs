//! Placement of the correct answer among the incorrect ones.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::trivia::model::{ActiveQuestion, Question};

/// How the insertion index for the correct answer is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InsertionMode {
    /// Every slot in `[0, len]` is equally likely.
    #[default]
    Uniform,
    /// `round(u * len)` with `u` in `[0, 1)`. The two boundary slots get
    /// half the weight of interior slots.
    Rounded,
}

/// Draw the slot at which the correct answer is inserted into a list of
/// `len` incorrect answers. Always in `0..=len`.
pub fn insertion_index<R: Rng + ?Sized>(len: usize, mode: InsertionMode, rng: &mut R) -> usize {
    match mode {
        InsertionMode::Uniform => rng.gen_range(0..=len),
        InsertionMode::Rounded => {
            let draw: f64 = rng.gen();
            ((draw * len as f64).round() as usize).min(len)
        }
    }
}

/// Build the combined option list for `question`.
pub fn combine_options<R: Rng + ?Sized>(
    question: &Question,
    mode: InsertionMode,
    rng: &mut R,
) -> Vec<String> {
    let mut options = Vec::with_capacity(question.incorrect_answers.len() + 1);
    options.extend(question.incorrect_answers.iter().cloned());
    let index = insertion_index(options.len(), mode, rng);
    options.insert(index, question.correct_answer.clone());
    options
}

/// Wrap a freshly fetched question with its shuffled options.
pub fn activate<R: Rng + ?Sized>(
    question: Question,
    mode: InsertionMode,
    rng: &mut R,
) -> ActiveQuestion {
    let options = combine_options(&question, mode, rng);
    ActiveQuestion { question, options }
}
