use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Flashcard;

/// How the user answers the questions of a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
  /// User picks one of four options - exact matching
  #[serde(alias = "mcq")]
  MultipleChoice,
  /// User types the answer - fuzzy local grading
  #[default]
  #[serde(alias = "written")]
  Written,
}

impl QuizKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::MultipleChoice => "multiple_choice",
      Self::Written => "written",
    }
  }

  /// Returns true if answers are compared by exact equality
  pub fn is_strict(&self) -> bool {
    matches!(self, Self::MultipleChoice)
  }
}

/// Outcome of checking one answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResult {
  pub is_correct: bool,
  pub feedback: String,
}

/// A card prepared for a quiz, plus the user's answer once given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
  #[serde(flatten)]
  pub card: Flashcard,
  pub kind: QuizKind,
  pub points: u32,
  /// Shuffled options (multiple choice only)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_selection: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_correct: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub feedback: Option<String>,
}

impl QuizQuestion {
  pub fn new(card: Flashcard, kind: QuizKind, points: u32) -> Self {
    Self {
      card,
      kind,
      points,
      options: None,
      user_selection: None,
      is_correct: None,
      feedback: None,
    }
  }

  /// Record the user's answer and its grade
  pub fn record(&mut self, answer: &str, grade: &GradeResult) {
    self.user_selection = Some(answer.to_string());
    self.is_correct = Some(grade.is_correct);
    self.feedback = Some(grade.feedback.clone());
  }
}

/// Final result of a finished quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizScore {
  /// Sum of points of correctly answered questions
  pub score: u32,
  pub total_possible: u32,
  pub count: usize,
  /// Kind of quiz that was scored
  #[serde(default)]
  pub kind: QuizKind,
  pub completed_at: DateTime<Utc>,
}

impl QuizScore {
  /// Fraction of available points earned (0.0 for an empty quiz)
  pub fn ratio(&self) -> f64 {
    if self.total_possible == 0 {
      0.0
    } else {
      self.score as f64 / self.total_possible as f64
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_quiz_kind_accepts_short_names() {
    let kind: QuizKind = serde_json::from_str("\"mcq\"").unwrap();
    assert_eq!(kind, QuizKind::MultipleChoice);
    assert!(kind.is_strict());

    let kind: QuizKind = serde_json::from_str("\"written\"").unwrap();
    assert_eq!(kind.as_str(), "written");
  }

  #[test]
  fn test_question_serializes_flat() {
    let question = QuizQuestion::new(Flashcard::new("1", "Q", "A"), QuizKind::Written, 5);
    let json = serde_json::to_value(&question).unwrap();

    assert_eq!(json["question"], "Q");
    assert_eq!(json["answer"], "A");
    assert_eq!(json["points"], 5);
    assert!(json.get("options").is_none());
  }

  #[test]
  fn test_record_answer() {
    let mut question = QuizQuestion::new(Flashcard::new("1", "Q", "A"), QuizKind::Written, 5);
    let grade = GradeResult {
      is_correct: true,
      feedback: "ok".to_string(),
    };
    question.record("A", &grade);

    assert_eq!(question.user_selection.as_deref(), Some("A"));
    assert_eq!(question.is_correct, Some(true));
  }

  #[test]
  fn test_score_ratio() {
    let score = QuizScore {
      score: 5,
      total_possible: 20,
      count: 4,
      kind: QuizKind::Written,
      completed_at: Utc::now(),
    };
    assert_eq!(score.ratio(), 0.25);

    let json = serde_json::to_value(&score).unwrap();
    assert_eq!(json["kind"], "written");
  }
}
