use std::sync::Arc;

use axum::{
    extract::{Extension, Form, State},
    response::{Html, Redirect},
};
use tera::{Context, Tera};
use tower_sessions::Session;

use crate::{
    data::models::{AnswerForm, QuizError, Vocabulary},
    features::quiz::request_rng,
    handlers::redirect_with_flash,
    utils::{self, render_template},
};

pub async fn quiz_page(
    Extension(templates): Extension<Arc<Tera>>,
    State(default_vocab): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Html<String>, QuizError> {
    let active = utils::active_vocabulary(&session, &default_vocab).await?;
    let state = utils::load_quiz_state(&session).await?;

    let mut context = Context::new();
    context.insert("quiz", &state.view());
    context.insert("source", &active.source);
    context.insert("word_count", &active.vocabulary.len());
    context.insert("flash", &utils::take_flash(&session).await);
    Ok(render_template(&templates, "quiz.html", context))
}

pub async fn start_quiz(
    State(default_vocab): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, QuizError> {
    let active = utils::active_vocabulary(&session, &default_vocab).await?;
    let mut state = utils::load_quiz_state(&session).await?;

    state.start(&active.vocabulary, &mut request_rng());
    utils::save_quiz_state(&session, &state).await?;
    Ok(Redirect::to("/"))
}

pub async fn submit_answer(
    session: Session,
    Form(form): Form<AnswerForm>,
) -> Result<Redirect, QuizError> {
    let mut state = utils::load_quiz_state(&session).await?;

    let correct = match state.submit(&form.guess) {
        Ok(feedback) => feedback.correct,
        Err(e) => return redirect_with_flash(&session, e, "/").await,
    };
    log::debug!("Question {} answered, correct: {}", state.question_number, correct);

    utils::save_quiz_state(&session, &state).await?;
    Ok(Redirect::to("/"))
}

pub async fn next_question(
    State(default_vocab): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Redirect, QuizError> {
    let active = utils::active_vocabulary(&session, &default_vocab).await?;
    let mut state = utils::load_quiz_state(&session).await?;

    if let Err(e) = state.next(&active.vocabulary, &mut request_rng()) {
        return redirect_with_flash(&session, e, "/").await;
    }
    utils::save_quiz_state(&session, &state).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset_quiz(session: Session) -> Result<Redirect, QuizError> {
    let mut state = utils::load_quiz_state(&session).await?;
    state.reset();
    utils::save_quiz_state(&session, &state).await?;
    Ok(Redirect::to("/"))
}
