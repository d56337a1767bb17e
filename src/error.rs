//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Text extraction errors
#[derive(Debug, Error)]
pub enum OcrError {
  #[error("Recognition backend unavailable: {0}")]
  BackendUnavailable(String),

  #[error("Recognition backend error: {0}")]
  Backend(String),

  #[error("Recognition failed on page {page}: {reason}")]
  RecognitionFailed { page: usize, reason: String },

  #[error("I/O error during recognition: {0}")]
  Io(#[from] std::io::Error),
}

impl OcrError {
  /// Attach the 1-based page number to a per-call failure
  pub fn at_page(self, page: usize) -> Self {
    match self {
      Self::Backend(reason) => Self::RecognitionFailed { page, reason },
      Self::Io(e) => Self::RecognitionFailed {
        page,
        reason: e.to_string(),
      },
      other => other,
    }
  }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid configuration: {0}")]
  Parse(#[from] toml::de::Error),
}

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return None
  fn log_warn(self, context: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
  fn log_warn(self, context: &str) -> Option<T> {
    match self {
      Ok(v) => Some(v),
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_recognition_failed_message() {
    let err = OcrError::RecognitionFailed {
      page: 2,
      reason: "exit status 1".to_string(),
    };
    assert_eq!(err.to_string(), "Recognition failed on page 2: exit status 1");
  }

  #[test]
  fn test_at_page_keeps_unavailable() {
    let err = OcrError::BackendUnavailable("missing".to_string()).at_page(3);
    assert!(matches!(err, OcrError::BackendUnavailable(_)));

    let err = OcrError::Backend("crashed".to_string()).at_page(3);
    assert!(matches!(err, OcrError::RecognitionFailed { page: 3, .. }));
  }

  #[test]
  fn test_log_warn_discards_error() {
    let result: Result<Vec<u8>, String> = Err("boom".to_string());
    assert_eq!(result.log_warn("decode"), None);
  }

  #[test]
  fn test_log_warn_passes_value_through() {
    let result: Result<u8, String> = Ok(7);
    assert_eq!(result.log_warn("unused"), Some(7));
  }
}
