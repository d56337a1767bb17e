//! Application state shared by all handlers.

use std::sync::Arc;

use crate::domain::Language;
use crate::ocr::TextExtractor;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
  /// Offline text extraction, `None` when no recognition backend could be started
  pub extractor: Option<Arc<TextExtractor>>,

  /// Feedback language used when a request does not name one
  pub language: Language,
}

impl AppState {
  pub fn new(extractor: Option<TextExtractor>, language: Language) -> Self {
    Self {
      extractor: extractor.map(Arc::new),
      language,
    }
  }

  pub fn ocr_available(&self) -> bool {
    self.extractor.is_some()
  }
}
