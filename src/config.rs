//! Application configuration.
//!
//! Algorithm parameters are named constants; deployment settings are loaded
//! from `config.toml`, then the environment (`.env` supported), then defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::Language;
use crate::error::ConfigError;

// ==================== Image Preprocessing ====================

/// Captured pages wider than this are downscaled before recognition
pub const MAX_IMAGE_WIDTH: u32 = 1500;

/// Channel average above this becomes white, otherwise black
pub const BINARIZE_MIDPOINT: u32 = 128;

/// JPEG quality used when re-encoding a preprocessed page
pub const JPEG_QUALITY: u8 = 92;

// ==================== Text Merge ====================

/// Number of trailing document lines a new page is compared against
pub const MERGE_WINDOW_LINES: usize = 15;

/// Similarity above which a new line counts as a duplicate of an existing one
pub const MERGE_DUPLICATE_THRESHOLD: f64 = 0.65;

/// Existing lines must be longer than this to enter the comparison window
pub const MERGE_MIN_EXISTING_LINE_CHARS: usize = 3;

/// New lines shorter than this (after trimming) are discarded as noise
pub const MERGE_MIN_NEW_LINE_CHARS: usize = 3;

// ==================== Similarity ====================

/// Strings shorter than this are never considered similar
pub const SIMILARITY_MIN_CHARS: usize = 3;

// ==================== Quiz ====================

/// Number of distractor choices in multiple choice mode
pub const DISTRACTOR_COUNT: usize = 3;

/// Candidate answers must be longer than this to be used as distractors
pub const DISTRACTOR_MIN_CHARS: usize = 2;

/// Length-closest candidates kept before shuffling
pub const DISTRACTOR_CANDIDATE_LIMIT: usize = 10;

/// Similarity above which a written answer is accepted
pub const GRADE_SIMILARITY_THRESHOLD: f64 = 0.4;

/// Characters of the reference answer revealed in a hint
pub const HINT_CHARS: usize = 50;

/// Points awarded for a question when none were assigned
pub const DEFAULT_QUESTION_POINTS: u32 = 5;

// ==================== Loaded Configuration ====================

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
    pub merge: MergeSettings,
    pub quiz: QuizConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

/// Settings for the tesseract command line backend
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    pub tesseract_path: PathBuf,
    /// Tesseract language list, e.g. `ara+eng`
    pub languages: String,
    /// Tesseract `--psm` value (1 = automatic segmentation with OSD)
    pub page_seg_mode: u8,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_path: PathBuf::from("tesseract"),
            languages: "ara+eng".to_string(),
            page_seg_mode: 1,
        }
    }
}

/// Tunable duplicate-suppression window for page merging
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    pub window_lines: usize,
    pub duplicate_threshold: f64,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            window_lines: MERGE_WINDOW_LINES,
            duplicate_threshold: MERGE_DUPLICATE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Language of feedback and filler texts when a request names none
    pub language: Language,
}

impl AppConfig {
    /// Parse a TOML document; missing sections and keys take defaults
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Load configuration with priority: config.toml > env > default
    pub fn load() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let path = Path::new(CONFIG_FILE);
        let mut config = if path.exists() {
            match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Using configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Fill values the config file left at their defaults from the environment
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let defaults = Self::default();

        if self.server.addr == defaults.server.addr {
            if let Some(addr) = var("STUDY_CARDS_ADDR") {
                self.server.addr = addr;
            }
        }
        if self.server.port == defaults.server.port {
            if let Some(port) = var("PORT") {
                match port.parse() {
                    Ok(port) => self.server.port = port,
                    Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
                }
            }
        }
        if self.ocr.tesseract_path == defaults.ocr.tesseract_path {
            if let Some(path) = var("TESSERACT_PATH") {
                self.ocr.tesseract_path = PathBuf::from(path);
            }
        }
        if self.ocr.languages == defaults.ocr.languages {
            if let Some(languages) = var("OCR_LANGUAGES") {
                self.ocr.languages = languages;
            }
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_constants() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.ocr.languages, "ara+eng");
        assert_eq!(config.ocr.page_seg_mode, 1);
        assert_eq!(config.merge.window_lines, 15);
        assert_eq!(config.merge.duplicate_threshold, 0.65);
        assert_eq!(config.quiz.language, Language::Arabic);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [merge]
            window_lines = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.server.addr, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.merge.window_lines, 20);
        assert_eq!(config.merge.duplicate_threshold, MERGE_DUPLICATE_THRESHOLD);
    }

    #[test]
    fn test_quiz_language_from_toml() {
        let config = AppConfig::from_toml("[quiz]\nlanguage = \"en\"\n").unwrap();
        assert_eq!(config.quiz.language, Language::English);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(matches!(
            AppConfig::from_toml("[server\nport = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ocr]\nlanguages = \"eng\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.ocr.languages, "eng");
        assert_eq!(config.ocr.tesseract_path, PathBuf::from("tesseract"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_env_fills_unset_values_only() {
        let mut config = AppConfig::from_toml("[server]\nport = 8080\n").unwrap();
        config.apply_env(|key| match key {
            "PORT" => Some("9999".to_string()),
            "OCR_LANGUAGES" => Some("eng".to_string()),
            _ => None,
        });

        // config.toml wins over the environment
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ocr.languages, "eng");
    }

    #[test]
    fn test_env_invalid_port_ignored() {
        let mut config = AppConfig::default();
        config.apply_env(|key| (key == "PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 3000);
    }
}
