//! Quiz assembly and scoring on top of the local distractor and grading logic.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;

use super::distractors::generate_distractors;
use super::grading::grade;
use crate::config;
use crate::domain::{Flashcard, GradeResult, Language, QuizKind, QuizQuestion, QuizScore};

/// Random subset of `cards`, at most `count` long
pub fn select_cards<R: Rng + ?Sized>(cards: &[Flashcard], count: usize, rng: &mut R) -> Vec<Flashcard> {
  let mut selected = cards.to_vec();
  selected.shuffle(rng);
  selected.truncate(count);
  selected
}

/// Builds one question per card.
///
/// `points[i]` is used for card `i` when present and non-zero, otherwise the
/// default. Multiple choice questions get three local distractors drawn from
/// `pool` plus the correct answer, in random order.
pub fn prepare_questions<R: Rng + ?Sized>(
  cards: &[Flashcard],
  pool: &[Flashcard],
  kind: QuizKind,
  points: &[u32],
  language: Language,
  rng: &mut R,
) -> Vec<QuizQuestion> {
  cards
    .iter()
    .enumerate()
    .map(|(i, card)| {
      let card_points = points_or_default(points.get(i).copied().unwrap_or(0));
      let mut question = QuizQuestion::new(card.clone(), kind, card_points);

      if kind == QuizKind::MultipleChoice {
        let mut options = generate_distractors(&card.answer, pool, language, rng).to_vec();
        options.push(card.answer.clone());
        options.shuffle(rng);
        question.options = Some(options);
      }

      question
    })
    .collect()
}

/// Exact-match check for a multiple choice selection
pub fn check_choice(question: &QuizQuestion, selection: &str, language: Language) -> GradeResult {
  let is_correct = selection == question.card.answer;
  let feedback = if is_correct {
    language.choice_correct().to_string()
  } else {
    format!("{}{}", language.choice_answer_prefix(), question.card.answer)
  };
  GradeResult { is_correct, feedback }
}

/// Grades and records an answer. Blank answers are not graded.
pub fn answer_question(
  question: &mut QuizQuestion,
  answer: &str,
  language: Language,
) -> Option<GradeResult> {
  if answer.trim().is_empty() {
    return None;
  }

  let result = if question.kind.is_strict() {
    check_choice(question, answer, language)
  } else {
    grade(&question.card.answer, answer, language)
  };
  question.record(answer, &result);
  Some(result)
}

/// Zero means no points were assigned
fn points_or_default(points: u32) -> u32 {
  if points > 0 {
    points
  } else {
    config::DEFAULT_QUESTION_POINTS
  }
}

/// Totals points over answered questions; unanswered ones count as wrong.
///
/// Questions carrying zero points are worth the default. The quiz kind is
/// taken from the first question.
pub fn score(questions: &[QuizQuestion]) -> QuizScore {
  let score = questions
    .iter()
    .filter(|q| q.is_correct == Some(true))
    .map(|q| points_or_default(q.points))
    .sum();
  let total_possible = questions.iter().map(|q| points_or_default(q.points)).sum();

  QuizScore {
    score,
    total_possible,
    count: questions.len(),
    kind: questions.first().map(|q| q.kind).unwrap_or_default(),
    completed_at: Utc::now(),
  }
}
