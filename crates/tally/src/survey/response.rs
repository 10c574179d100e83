//! A single respondent's normalized answers.

use serde::{Deserialize, Serialize};

/// One question/answer pair from a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The `N` of the `Question N`/`Answer N` columns.
    pub question_index: u32,
    pub question_text: String,
    pub answer_text: String,
}

/// A respondent's department and answers, ordered by question index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    department: String,
    answers: Vec<Answer>,
}

impl Response {
    /// Build a response. Answers are sorted by question index.
    pub fn new(department: impl Into<String>, mut answers: Vec<Answer>) -> Self {
        answers.sort_by_key(|a| a.question_index);
        Self {
            department: department.into(),
            answers,
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Take the department and answers apart.
    pub fn into_parts(self) -> (String, Vec<Answer>) {
        (self.department, self.answers)
    }

    /// Get the answer for a question index.
    pub fn answer(&self, question_index: u32) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_index == question_index)
    }
}
