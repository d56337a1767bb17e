//! Local quiz fallback endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::domain::{Flashcard, GradeResult, Language, QuizKind, QuizQuestion, QuizScore};
use crate::quiz;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DistractorRequest {
    pub correct_answer: String,
    #[serde(default)]
    pub pool: Vec<Flashcard>,
    pub language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DistractorResponse {
    pub distractors: Vec<String>,
}

/// POST /api/quiz/distractors
pub async fn distractors(
    State(state): State<AppState>,
    Json(request): Json<DistractorRequest>,
) -> Json<DistractorResponse> {
    let language = request.language.unwrap_or(state.language);
    let distractors = quiz::generate_distractors(
        &request.correct_answer,
        &request.pool,
        language,
        &mut rand::rng(),
    );
    Json(DistractorResponse {
        distractors: distractors.into(),
    })
}

#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    pub reference: String,
    pub user_answer: String,
    pub language: Option<Language>,
}

/// POST /api/quiz/grade
pub async fn grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Json<GradeResult> {
    let language = request.language.unwrap_or(state.language);
    Json(quiz::grade(&request.reference, &request.user_answer, language))
}

#[derive(Debug, Deserialize)]
pub struct PrepareRequest {
    pub cards: Vec<Flashcard>,
    /// Answers to draw distractors from (defaults to `cards`)
    pub pool: Option<Vec<Flashcard>>,
    #[serde(default)]
    pub kind: QuizKind,
    /// Pick this many random cards instead of using all of them in order
    pub count: Option<usize>,
    #[serde(default)]
    pub points: Vec<u32>,
    pub language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrepareResponse {
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/quiz/prepare
pub async fn prepare(
    State(state): State<AppState>,
    Json(request): Json<PrepareRequest>,
) -> impl IntoResponse {
    if request.cards.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "No cards to build a quiz from." })),
        )
            .into_response();
    }

    let language = request.language.unwrap_or(state.language);
    let mut rng = rand::rng();

    let cards = match request.count {
        Some(count) => quiz::select_cards(&request.cards, count, &mut rng),
        None => request.cards.clone(),
    };
    let pool = request.pool.as_deref().unwrap_or(&request.cards);

    let questions =
        quiz::prepare_questions(&cards, pool, request.kind, &request.points, language, &mut rng);
    tracing::debug!("Prepared {} {} questions", questions.len(), request.kind.as_str());

    (StatusCode::OK, Json(PrepareResponse { questions })).into_response()
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question: QuizQuestion,
    pub answer: String,
    pub language: Option<Language>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(flatten)]
    pub result: GradeResult,
    /// The question with the answer recorded
    pub question: QuizQuestion,
}

/// POST /api/quiz/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> impl IntoResponse {
    let language = request.language.unwrap_or(state.language);
    let mut question = request.question;

    match quiz::answer_question(&mut question, &request.answer, language) {
        Some(result) => (StatusCode::OK, Json(AnswerResponse { result, question })).into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Answer is empty." })),
        )
            .into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub questions: Vec<QuizQuestion>,
}

/// POST /api/quiz/score
pub async fn score(Json(request): Json<ScoreRequest>) -> Json<QuizScore> {
    let result = quiz::score(&request.questions);
    tracing::info!(
        "{} quiz finished: {}/{} over {} questions",
        result.kind.as_str(),
        result.score,
        result.total_possible,
        result.count
    );
    Json(result)
}
