use std::sync::LazyLock;

use regex::Regex;

use crate::config;
use crate::domain::{GradeResult, Language};
use crate::similarity::similarity;

/// Anything other than ASCII word characters, Arabic letters and whitespace
static NON_ANSWER_CHARS: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[^A-Za-z0-9_\x{0621}-\x{064A}\s]").expect("valid answer character pattern")
});

/// Lowercases, strips punctuation and other scripts, and trims.
pub fn normalize_answer(input: &str) -> String {
  NON_ANSWER_CHARS
    .replace_all(&input.to_lowercase(), "")
    .trim()
    .to_string()
}

/// Grades a written answer against the reference without any AI service.
///
/// Accepted when the answer repeats the reference (ignoring case and outer
/// whitespace), when either normalized text contains the other, or when they
/// are loosely similar. A blank answer, or one that only normalizes to
/// nothing while the reference does not, is never accepted. Rejections carry
/// the start of the reference as a hint.
pub fn grade(reference: &str, user_answer: &str, language: Language) -> GradeResult {
  let is_correct = if user_answer.trim().is_empty() {
    false
  } else if reference.trim().to_lowercase() == user_answer.trim().to_lowercase() {
    // Covers scripts the normalizer strips entirely
    true
  } else {
    let expected = normalize_answer(reference);
    let given = normalize_answer(user_answer);
    !given.is_empty()
      && (expected.contains(&given)
        || given.contains(&expected)
        || similarity(&expected, &given) > config::GRADE_SIMILARITY_THRESHOLD)
  };

  let feedback = if is_correct {
    language.graded_correct().to_string()
  } else {
    let hint: String = reference.chars().take(config::HINT_CHARS).collect();
    format!("{}{}...", language.expected_hint_prefix(), hint)
  };

  GradeResult { is_correct, feedback }
}
