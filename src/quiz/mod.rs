//! Local quiz fallback: distractors, grading and scoring without AI.

pub mod distractors;
pub mod grading;
pub mod session;

pub use distractors::generate_distractors;
pub use grading::{grade, normalize_answer};
pub use session::{answer_question, check_choice, prepare_questions, score, select_cards};
