//! Merging recognized text from consecutive page captures.
//!
//! Photos of a long passage usually overlap by a few lines at each page
//! boundary. Each new page is compared against the tail of the document
//! built so far and lines that repeat it are dropped.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::preprocess::preprocess;
use super::recognizer::Recognizer;
use crate::config::{self, MergeSettings};
use crate::error::OcrError;
use crate::similarity::similarity;

/// Runs of whitespace other than line breaks
static HORIZONTAL_SPACE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"[^\S\r\n]+").expect("valid whitespace pattern"));

/// Normalizes raw recognizer output for one page.
///
/// Collapses horizontal whitespace to a single space, strips the `|` glyph
/// recognition often emits for Arabic script, and trims the ends.
pub fn clean_page_text(raw: &str) -> String {
  HORIZONTAL_SPACE.replace_all(raw, " ").replace('|', "").trim().to_string()
}

/// Line counts for one merged page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOutcome {
  pub kept: usize,
  pub dropped: usize,
}

/// Accumulates cleaned page texts into one document, left to right.
#[derive(Debug, Clone)]
pub struct PageMerger {
  settings: MergeSettings,
  document: String,
}

impl PageMerger {
  pub fn new(settings: MergeSettings) -> Self {
    Self {
      settings,
      document: String::new(),
    }
  }

  /// Appends a cleaned page, dropping lines that duplicate the document tail.
  pub fn push_page(&mut self, cleaned: &str) -> PageOutcome {
    if self.document.is_empty() {
      self.document = cleaned.to_string();
      return PageOutcome {
        kept: cleaned.lines().count(),
        dropped: 0,
      };
    }

    let kept: Vec<&str> = {
      let existing: Vec<&str> = self
        .document
        .split('\n')
        .map(str::trim)
        .filter(|line| line.chars().count() > config::MERGE_MIN_EXISTING_LINE_CHARS)
        .collect();
      let window = &existing[existing.len().saturating_sub(self.settings.window_lines)..];

      cleaned
        .split('\n')
        .filter(|line| {
          let trimmed = line.trim();
          if trimmed.chars().count() < config::MERGE_MIN_NEW_LINE_CHARS {
            return false;
          }
          !window
            .iter()
            .any(|old| similarity(old, trimmed) > self.settings.duplicate_threshold)
        })
        .collect()
    };

    let total = cleaned.split('\n').count();
    if !kept.is_empty() {
      self.document.push('\n');
      self.document.push_str(&kept.join("\n"));
    }

    PageOutcome {
      kept: kept.len(),
      dropped: total - kept.len(),
    }
  }

  /// Document so far, untrimmed
  pub fn document(&self) -> &str {
    &self.document
  }

  pub fn finish(self) -> String {
    self.document.trim().to_string()
  }
}

/// Offline text extraction: preprocess, recognize and merge pages in order.
///
/// Pages are processed strictly sequentially since each page is
/// de-duplicated against everything merged before it.
pub struct TextExtractor {
  recognizer: Arc<dyn Recognizer>,
  settings: MergeSettings,
}

impl TextExtractor {
  pub fn new(recognizer: Arc<dyn Recognizer>, settings: MergeSettings) -> Self {
    Self {
      recognizer,
      settings,
    }
  }

  /// Extracts one merged document from the captured pages.
  ///
  /// An empty result is not an error. A recognition failure on any page
  /// aborts the whole extraction; no partial text is returned.
  pub async fn merge_all(&self, images: &[Vec<u8>]) -> Result<String, OcrError> {
    let mut merger = PageMerger::new(self.settings);

    for (index, image) in images.iter().enumerate() {
      let page = index + 1;
      let prepared = preprocess(image).await;
      let raw = self
        .recognizer
        .recognize(&prepared)
        .await
        .map_err(|e| e.at_page(page))?;

      let outcome = merger.push_page(&clean_page_text(&raw));
      tracing::debug!(
        "Page {}/{}: kept {} lines, dropped {}",
        page,
        images.len(),
        outcome.kept,
        outcome.dropped
      );
    }

    let text = merger.finish();
    tracing::info!("Extracted {} chars from {} pages", text.chars().count(), images.len());
    Ok(text)
  }
}
