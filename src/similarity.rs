//! Normalized edit-distance similarity for short strings.
//!
//! Used both to suppress duplicate lines when merging scanned pages and to
//! accept paraphrased written answers. Lengths are counted in characters.

use crate::config;

/// Levenshtein distance (insert, delete, substitute; each cost 1).
///
/// Keeps a single row of the DP table.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
  let a_chars: Vec<char> = a.chars().collect();
  let b_chars: Vec<char> = b.chars().collect();

  if a_chars.is_empty() {
    return b_chars.len();
  }
  if b_chars.is_empty() {
    return a_chars.len();
  }

  let mut row: Vec<usize> = (0..=b_chars.len()).collect();

  for (i, &ac) in a_chars.iter().enumerate() {
    // row[0] becomes i + 1; `diagonal` holds the previous row's value at j - 1
    let mut diagonal = row[0];
    row[0] = i + 1;

    for (j, &bc) in b_chars.iter().enumerate() {
      let above = row[j + 1];
      let cost = if ac == bc { 0 } else { 1 };
      row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
      diagonal = above;
    }
  }

  row[b_chars.len()]
}

/// Similarity score in `[0, 1]`.
///
/// Identical strings score 1.0 (including two empty strings). Otherwise, if
/// either side is shorter than three characters the score is 0. Anything
/// else scores `(L - distance) / L` where `L` is the longer length.
pub fn similarity(a: &str, b: &str) -> f64 {
  if a == b {
    return 1.0;
  }

  let a_len = a.chars().count();
  let b_len = b.chars().count();
  if a_len < config::SIMILARITY_MIN_CHARS || b_len < config::SIMILARITY_MIN_CHARS {
    return 0.0;
  }

  let longer = a_len.max(b_len);
  let distance = levenshtein_distance(a, b);
  (longer - distance.min(longer)) as f64 / longer as f64
}
