//! Localized texts produced by the quiz fallback.

use serde::{Deserialize, Serialize};

/// UI language of the surrounding app. Arabic is the primary locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
  #[default]
  #[serde(rename = "ar")]
  Arabic,
  #[serde(rename = "en")]
  English,
  #[serde(rename = "de")]
  German,
}

impl Language {
  pub fn code(&self) -> &'static str {
    match self {
      Self::Arabic => "ar",
      Self::English => "en",
      Self::German => "de",
    }
  }

  /// Feedback for a written answer accepted by the local grader
  pub fn graded_correct(&self) -> &'static str {
    match self {
      Self::Arabic => "إجابة صحيحة! (تقييم محلي)",
      Self::English => "Correct answer! (local grading)",
      Self::German => "Richtige Antwort! (lokale Bewertung)",
    }
  }

  /// Prefix of the hint shown after a rejected written answer
  pub fn expected_hint_prefix(&self) -> &'static str {
    match self {
      Self::Arabic => "الإجابة المتوقعة كانت تدور حول: ",
      Self::English => "The expected answer was about: ",
      Self::German => "Die erwartete Antwort handelte von: ",
    }
  }

  /// Feedback for a correct multiple choice selection
  pub fn choice_correct(&self) -> &'static str {
    match self {
      Self::Arabic => "أحسنت!",
      Self::English => "Correct!",
      Self::German => "Richtig!",
    }
  }

  /// Prefix naming the right option after a wrong selection
  pub fn choice_answer_prefix(&self) -> &'static str {
    match self {
      Self::Arabic => "الإجابة الصحيحة هي: ",
      Self::English => "Correct answer is: ",
      Self::German => "Die richtige Antwort ist: ",
    }
  }

  /// Generic wrong options used when the card pool is too small
  pub fn distractor_fillers(&self) -> [&'static str; 4] {
    match self {
      Self::Arabic => [
        "إجابة غير صحيحة بناءً على السياق.",
        "المعلومات غير متوفرة في النص.",
        "عكس ما تم ذكره في السؤال.",
        "لا شيء مما سبق.",
      ],
      Self::English => [
        "Incorrect given the context.",
        "Information not present in the text.",
        "The opposite of what was stated.",
        "None of the above.",
      ],
      Self::German => [
        "Im Kontext nicht korrekt.",
        "Die Information steht nicht im Text.",
        "Das Gegenteil des Gesagten.",
        "Nichts davon.",
      ],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_serde_uses_language_codes() {
    assert_eq!(serde_json::to_string(&Language::German).unwrap(), "\"de\"");
    let lang: Language = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(lang, Language::English);
    assert_eq!(lang.code(), "en");
  }

  #[test]
  fn test_fillers_are_distinct() {
    for lang in [Language::Arabic, Language::English, Language::German] {
      let fillers = lang.distractor_fillers();
      for (i, a) in fillers.iter().enumerate() {
        for b in &fillers[i + 1..] {
          assert_ne!(a, b);
        }
      }
    }
  }
}
