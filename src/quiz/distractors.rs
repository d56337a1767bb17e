use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config;
use crate::domain::{Flashcard, Language};

/// Picks wrong multiple choice options from the other cards' answers.
///
/// Repeated answers in the pool count as a single candidate. Answers closest
/// in length to the correct one are the most plausible, so candidates are
/// ranked by length difference and the best ten shuffled
/// before three are taken. Missing slots are filled with generic options.
/// Always returns exactly three strings, none equal to `correct_answer`.
pub fn generate_distractors<R: Rng + ?Sized>(
  correct_answer: &str,
  pool: &[Flashcard],
  language: Language,
  rng: &mut R,
) -> [String; config::DISTRACTOR_COUNT] {
  let target_len = correct_answer.chars().count();

  let mut seen = HashSet::new();
  let mut candidates: Vec<&str> = pool
    .iter()
    .map(|card| card.answer.as_str())
    .filter(|answer| {
      *answer != correct_answer && answer.chars().count() > config::DISTRACTOR_MIN_CHARS
    })
    .filter(|answer| seen.insert(*answer))
    .collect();

  // Stable: equal length differences keep pool order
  candidates.sort_by_key(|answer| answer.chars().count().abs_diff(target_len));
  candidates.truncate(config::DISTRACTOR_CANDIDATE_LIMIT);
  candidates.shuffle(rng);

  let mut selected: Vec<String> = candidates
    .into_iter()
    .take(config::DISTRACTOR_COUNT)
    .map(str::to_string)
    .collect();

  // Cycle through the fillers by slot index. The four fillers are distinct,
  // so enough remain after skipping the correct answer and repeats.
  let fillers = language.distractor_fillers();
  let mut index = selected.len();
  while selected.len() < config::DISTRACTOR_COUNT {
    let filler = fillers[index % fillers.len()];
    index += 1;
    if filler != correct_answer && !selected.iter().any(|s| s == filler) {
      selected.push(filler.to_string());
    }
  }

  std::array::from_fn(|slot| std::mem::take(&mut selected[slot]))
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn pool(answers: &[&str]) -> Vec<Flashcard> {
    answers
      .iter()
      .enumerate()
      .map(|(i, a)| Flashcard::new(i.to_string(), format!("Question {}", i), *a))
      .collect()
  }

  #[test]
  fn test_excludes_short_answers() {
    let cards = pool(&["London", "Tokyo", "A", "Berlin"]);
    let mut rng = StdRng::seed_from_u64(1);

    let mut distractors = generate_distractors("Paris", &cards, Language::English, &mut rng).to_vec();
    distractors.sort();

    assert_eq!(distractors, vec!["Berlin", "London", "Tokyo"]);
  }

  #[test]
  fn test_empty_pool_uses_fillers() {
    let mut rng = StdRng::seed_from_u64(1);
    let distractors = generate_distractors("Paris", &[], Language::English, &mut rng);
    let fillers = Language::English.distractor_fillers();

    assert_eq!(distractors, [fillers[0], fillers[1], fillers[2]].map(String::from));
  }

  #[test]
  fn test_partial_pool_padded_by_slot() {
    let cards = pool(&["Madrid"]);
    let mut rng = StdRng::seed_from_u64(1);
    let distractors = generate_distractors("Paris", &cards, Language::Arabic, &mut rng);
    let fillers = Language::Arabic.distractor_fillers();

    assert_eq!(distractors[0], "Madrid");
    assert_eq!(distractors[1], fillers[1]);
    assert_eq!(distractors[2], fillers[2]);
  }

  #[test]
  fn test_never_returns_correct_answer() {
    let fillers = Language::English.distractor_fillers();
    // Correct answer that collides with a filler and with pool entries
    let correct = fillers[0];
    let cards = pool(&[correct, correct, "xy"]);
    let mut rng = StdRng::seed_from_u64(3);

    let distractors = generate_distractors(correct, &cards, Language::English, &mut rng);
    assert_eq!(distractors.len(), 3);
    assert!(distractors.iter().all(|d| d != correct));
    assert_eq!(distractors, [fillers[1], fillers[2], fillers[3]].map(String::from));
  }

  #[test]
  fn test_duplicate_answers_offered_once() {
    let cards = pool(&["Rome", "Rome", "Rome", "Oslo"]);
    let mut rng = StdRng::seed_from_u64(9);
    let distractors = generate_distractors("Paris", &cards, Language::English, &mut rng);

    let rome = distractors.iter().filter(|d| *d == "Rome").count();
    assert_eq!(rome, 1);
  }

  #[test]
  fn test_prefers_length_similar_answers() {
    // Ten answers of length 5, then far longer ones that never make the top ten
    let mut answers: Vec<String> = (0..10).map(|i| format!("ans{:02}", i)).collect();
    answers.extend((0..5).map(|i| format!("a much longer answer number {}", i)));
    let answers: Vec<&str> = answers.iter().map(String::as_str).collect();
    let cards = pool(&answers);

    for seed in 0..20 {
      let mut rng = StdRng::seed_from_u64(seed);
      let distractors = generate_distractors("Paris", &cards, Language::English, &mut rng);
      assert!(distractors.iter().all(|d| d.chars().count() == 5), "seed {seed}: {distractors:?}");
    }
  }

  #[test]
  fn test_seeded_rng_is_deterministic() {
    let cards = pool(&["London", "Tokyo", "Berlin", "Madrid", "Lisbon", "Vienna"]);

    let first = generate_distractors("Paris", &cards, Language::English, &mut StdRng::seed_from_u64(42));
    let second = generate_distractors("Paris", &cards, Language::English, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
  }
}
