//! Wire types for the Open Trivia Database API.

use serde::{Deserialize, Serialize};

/// Question format reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Multiple,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// A single trivia question exactly as the API returns it.
///
/// Text fields are HTML-entity encoded by the API; decoding is a
/// presentation concern and never applied here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Response envelope: `{ "response_code": 0, "results": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<Question>,
}

/// Human-readable description of an API response code.
pub fn describe_response_code(code: u8) -> &'static str {
    match code {
        0 => "success",
        1 => "no results for the requested query",
        2 => "invalid parameter",
        3 => "session token not found",
        4 => "session token exhausted",
        5 => "rate limit exceeded",
        _ => "unknown response code",
    }
}

/// A fetched question together with its displayed option list.
///
/// `options` holds every incorrect answer in API order with the correct
/// answer inserted once at a random position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuestion {
    #[serde(flatten)]
    pub question: Question,
    pub options: Vec<String>,
}

impl ActiveQuestion {
    /// Index of the correct answer within `options`.
    pub fn correct_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|option| self.question.is_correct(option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "response_code": 0,
        "results": [{
            "type": "multiple",
            "difficulty": "medium",
            "category": "Science: Computers",
            "question": "What does &quot;CPU&quot; stand for?",
            "correct_answer": "Central Processing Unit",
            "incorrect_answers": ["Central Process Unit", "Computer Personal Unit", "Central Processor Unit"]
        }]
    }"#;

    #[test]
    fn parses_api_envelope() {
        let envelope: ApiEnvelope = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(envelope.response_code, 0);
        assert_eq!(envelope.results.len(), 1);

        let question = &envelope.results[0];
        assert_eq!(question.kind, QuestionKind::Multiple);
        assert_eq!(question.difficulty, Difficulty::Medium);
        assert_eq!(question.incorrect_answers.len(), 3);
        // Entities are kept verbatim.
        assert!(question.question.contains("&quot;"));
    }

    #[test]
    fn missing_results_defaults_to_empty() {
        let envelope: ApiEnvelope = serde_json::from_str(r#"{"response_code": 1}"#).unwrap();
        assert_eq!(envelope.response_code, 1);
        assert!(envelope.results.is_empty());
    }

    #[test]
    fn boolean_questions_parse() {
        let json = r#"{
            "type": "boolean",
            "difficulty": "easy",
            "category": "Science: Computers",
            "question": "Linux was first created as an alternative to Windows XP.",
            "correct_answer": "False",
            "incorrect_answers": ["True"]
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.kind, QuestionKind::Boolean);
        assert!(question.is_correct("False"));
        assert!(!question.is_correct("True"));
    }

    #[test]
    fn correct_index_finds_inserted_answer() {
        let active = ActiveQuestion {
            question: Question {
                kind: QuestionKind::Boolean,
                difficulty: Difficulty::Easy,
                category: "c".into(),
                question: "q".into(),
                correct_answer: "True".into(),
                incorrect_answers: vec!["False".into()],
            },
            options: vec!["False".into(), "True".into()],
        };
        assert_eq!(active.correct_index(), Some(1));
    }

    #[test]
    fn response_codes_are_described() {
        assert_eq!(describe_response_code(5), "rate limit exceeded");
        assert_eq!(describe_response_code(42), "unknown response code");
    }
}
