//! Open Trivia Database client and question preparation.

pub mod client;
pub mod error;
pub mod model;
pub mod shuffle;

pub use client::{first_playable, TriviaClient};
pub use error::FetchError;
pub use model::{ActiveQuestion, ApiEnvelope, Difficulty, Question, QuestionKind};
pub use shuffle::{activate, combine_options, insertion_index, InsertionMode};
