use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart, State},
    response::{Html, Redirect},
};
use tera::{Context, Tera};
use tower_sessions::Session;

use crate::{
    data::{
        loader,
        models::{QuizError, Vocabulary},
    },
    features::quiz::QuizState,
    handlers::redirect_with_flash,
    utils::{self, render_template},
};

pub async fn vocabulary_page(
    Extension(templates): Extension<Arc<Tera>>,
    State(default_vocab): State<Arc<Vocabulary>>,
    session: Session,
) -> Result<Html<String>, QuizError> {
    let active = utils::active_vocabulary(&session, &default_vocab).await?;

    let mut context = Context::new();
    context.insert("entries", active.vocabulary.entries());
    context.insert("source", &active.source);
    context.insert("flash", &utils::take_flash(&session).await);
    Ok(render_template(&templates, "vocabulary.html", context))
}

pub async fn upload_vocabulary(
    session: Session,
    mut multipart: Multipart,
) -> Result<Redirect, QuizError> {
    let (file_name, vocabulary) = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(e) => return redirect_with_flash(&session, e, "/vocabulary").await,
    };

    log::info!("Session switched to uploaded vocabulary {} ({} words)", file_name, vocabulary.len());
    utils::set_uploaded_vocabulary(&session, &file_name, vocabulary).await?;
    utils::save_quiz_state(&session, &QuizState::default()).await?;
    Ok(Redirect::to("/vocabulary"))
}

pub async fn use_default_vocabulary(session: Session) -> Result<Redirect, QuizError> {
    utils::clear_uploaded_vocabulary(&session).await?;
    utils::save_quiz_state(&session, &QuizState::default()).await?;
    Ok(Redirect::to("/vocabulary"))
}

async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vocabulary), QuizError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| QuizError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = csv_file_name(field.file_name())?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| QuizError::Upload(e.to_string()))?;
        let vocabulary = loader::parse_vocabulary(bytes.as_ref())?;
        return Ok((file_name, vocabulary));
    }

    Err(QuizError::Upload("no file was provided".into()))
}

fn csv_file_name(file_name: Option<&str>) -> Result<String, QuizError> {
    match file_name {
        Some(name) if name.to_lowercase().ends_with(".csv") => Ok(name.to_string()),
        Some("") | None => Err(QuizError::Upload("no file was provided".into())),
        Some(name) => Err(QuizError::Upload(format!("{} is not a .csv file", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_csv_names_in_any_case() {
        assert_eq!(csv_file_name(Some("words.csv")).unwrap(), "words.csv");
        assert_eq!(csv_file_name(Some("WORDS.CSV")).unwrap(), "WORDS.CSV");
    }

    #[test]
    fn rejects_other_files() {
        assert!(matches!(csv_file_name(Some("words.xlsx")), Err(QuizError::Upload(_))));
        assert!(matches!(csv_file_name(Some("")), Err(QuizError::Upload(_))));
        assert!(matches!(csv_file_name(None), Err(QuizError::Upload(_))));
    }
}
