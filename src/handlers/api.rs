use std::sync::Arc;

use axum::{Json, extract::{FromRequest, State}};
use tower_sessions::Session;

use crate::{
    data::models::{AnswerForm, QuizError, QuizView, Vocabulary, WordEntry},
    features::quiz::request_rng,
    utils,
};

/// `Json` whose rejections come back in the API's error body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(QuizError))]
pub struct ApiJson<T>(pub T);

pub async fn quiz_state(session: Session) -> Result<Json<QuizView>, QuizError> {
    let state = utils::load_quiz_state(&session).await?;
    Ok(Json(state.view()))
}

pub async fn start(
    State(default_vocab): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Json<QuizView>, QuizError> {
    let active = utils::active_vocabulary(&session, &default_vocab).await?;
    let mut state = utils::load_quiz_state(&session).await?;

    state.start(&active.vocabulary, &mut request_rng());
    utils::save_quiz_state(&session, &state).await?;
    Ok(Json(state.view()))
}

pub async fn answer(
    session: Session,
    ApiJson(form): ApiJson<AnswerForm>,
) -> Result<Json<QuizView>, QuizError> {
    let mut state = utils::load_quiz_state(&session).await?;

    state.submit(&form.guess)?;
    utils::save_quiz_state(&session, &state).await?;
    Ok(Json(state.view()))
}

pub async fn next(
    State(default_vocab): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Json<QuizView>, QuizError> {
    let active = utils::active_vocabulary(&session, &default_vocab).await?;
    let mut state = utils::load_quiz_state(&session).await?;

    state.next(&active.vocabulary, &mut request_rng())?;
    utils::save_quiz_state(&session, &state).await?;
    Ok(Json(state.view()))
}

pub async fn reset(session: Session) -> Result<Json<QuizView>, QuizError> {
    let mut state = utils::load_quiz_state(&session).await?;
    state.reset();
    utils::save_quiz_state(&session, &state).await?;
    Ok(Json(state.view()))
}

pub async fn vocabulary(
    State(default_vocab): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Json<Vec<WordEntry>>, QuizError> {
    let active = utils::active_vocabulary(&session, &default_vocab).await?;
    Ok(Json(active.vocabulary.entries().to_vec()))
}
