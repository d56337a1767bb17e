//! Offline text extraction from captured pages.

pub mod merge;
pub mod preprocess;
pub mod recognizer;

pub use merge::{clean_page_text, PageMerger, PageOutcome, TextExtractor};
pub use preprocess::preprocess;
pub use recognizer::{Recognizer, TesseractRecognizer};
