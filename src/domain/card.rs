use serde::{Deserialize, Serialize};

/// A study card as stored by the persistence backend.
///
/// Only the fields the quiz fallback reads are modelled; unknown fields
/// (owner, subject, timestamps) are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
  pub id: String,
  pub question: String,
  pub answer: String,
}

impl Flashcard {
  pub fn new(id: impl Into<String>, question: impl Into<String>, answer: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      question: question.into(),
      answer: answer.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_deserialize_ignores_backend_fields() {
    let card: Flashcard = serde_json::from_str(
      r#"{
        "id": "c1",
        "user_id": "u1",
        "subject_id": "s1",
        "question": "Capital of France?",
        "answer": "Paris",
        "created_at": "2024-01-01T00:00:00Z"
      }"#,
    )
    .unwrap();

    assert_eq!(card, Flashcard::new("c1", "Capital of France?", "Paris"));
  }
}
