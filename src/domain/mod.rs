pub mod card;
pub mod language;
pub mod quiz;

pub use card::Flashcard;
pub use language::Language;
pub use quiz::{GradeResult, QuizKind, QuizQuestion, QuizScore};
