pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod ocr;
pub mod quiz;
pub mod similarity;
pub mod state;
