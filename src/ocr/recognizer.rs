//! Text recognition backends.

use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::config::OcrConfig;
use crate::error::OcrError;

/// Converts one preprocessed page image into raw text.
///
/// Implementations may be slow; callers await each page before the next.
#[async_trait]
pub trait Recognizer: Send + Sync {
  async fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;
}

/// Recognizer backed by the `tesseract` command line tool.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
  executable: PathBuf,
  languages: String,
  page_seg_mode: u8,
}

impl TesseractRecognizer {
  /// Checks that the executable runs and has every requested language.
  ///
  /// Fails with `BackendUnavailable` otherwise, so extraction never runs
  /// against a backend that can only produce garbage.
  pub async fn init(config: &OcrConfig) -> Result<Self, OcrError> {
    let output = Command::new(&config.tesseract_path)
      .arg("--list-langs")
      .output()
      .await
      .map_err(|e| {
        OcrError::BackendUnavailable(format!("cannot run {}: {}", config.tesseract_path.display(), e))
      })?;

    if !output.status.success() {
      return Err(OcrError::BackendUnavailable(format!(
        "{} --list-langs exited with {}",
        config.tesseract_path.display(),
        output.status
      )));
    }

    // Older releases print the list on stderr
    let listing = format!(
      "{}\n{}",
      String::from_utf8_lossy(&output.stdout),
      String::from_utf8_lossy(&output.stderr)
    );
    let installed = parse_language_list(&listing);
    let missing = missing_languages(&config.languages, &installed);
    if !missing.is_empty() {
      return Err(OcrError::BackendUnavailable(format!(
        "tesseract language data not installed: {}",
        missing.join(", ")
      )));
    }

    tracing::info!(
      "Tesseract ready at {} (languages: {})",
      config.tesseract_path.display(),
      config.languages
    );

    Ok(Self {
      executable: config.tesseract_path.clone(),
      languages: config.languages.clone(),
      page_seg_mode: config.page_seg_mode,
    })
  }
}

#[async_trait]
impl Recognizer for TesseractRecognizer {
  async fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
    // Tesseract reads from a file; the temp file is removed on drop
    let input = NamedTempFile::with_suffix(".jpg")?;
    tokio::fs::write(input.path(), image).await?;

    let output = Command::new(&self.executable)
      .arg(input.path())
      .arg("stdout")
      .arg("-l")
      .arg(&self.languages)
      .arg("--psm")
      .arg(self.page_seg_mode.to_string())
      .output()
      .await?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(OcrError::Backend(format!("tesseract failed: {}", stderr.trim())));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
  }
}

/// Extracts language codes from `tesseract --list-langs` output
fn parse_language_list(listing: &str) -> Vec<String> {
  listing
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty() && !line.starts_with("List of") && !line.contains(' '))
    .map(str::to_string)
    .collect()
}

/// Requested languages (`ara+eng`) that are absent from `installed`
fn missing_languages<'a>(requested: &'a str, installed: &[String]) -> Vec<&'a str> {
  requested
    .split('+')
    .map(str::trim)
    .filter(|lang| !lang.is_empty() && !installed.iter().any(|i| i == lang))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  const LISTING: &str = "List of available languages in \"/usr/share/tessdata/\" (3):\nara\neng\nosd\n";

  #[test]
  fn test_parse_language_list() {
    assert_eq!(parse_language_list(LISTING), vec!["ara", "eng", "osd"]);
  }

  #[test]
  fn test_missing_languages() {
    let installed = parse_language_list(LISTING);
    assert!(missing_languages("ara+eng", &installed).is_empty());
    assert_eq!(missing_languages("ara+deu+eng", &installed), vec!["deu"]);
  }

  #[tokio::test]
  async fn test_init_fails_fast_without_executable() {
    let config = OcrConfig {
      tesseract_path: PathBuf::from("/nonexistent/bin/tesseract"),
      ..OcrConfig::default()
    };

    let result = TesseractRecognizer::init(&config).await;
    assert!(matches!(result, Err(OcrError::BackendUnavailable(_))));
  }
}
