use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::data::models::{QuizError, Vocabulary, VocabularySource, WordEntry};
use crate::features::quiz::QuizState;

const QUIZ_STATE_KEY: &str = "quiz_state";
const UPLOADED_VOCABULARY_KEY: &str = "uploaded_vocabulary";
const FLASH_KEY: &str = "flash_error";

#[derive(Serialize, Deserialize)]
struct UploadedVocabulary {
    file_name: String,
    entries: Vec<WordEntry>,
}

/// The vocabulary a session is currently quizzed on.
pub struct ActiveVocabulary {
    pub vocabulary: Arc<Vocabulary>,
    pub source: VocabularySource,
}

pub async fn load_quiz_state(session: &Session) -> Result<QuizState, QuizError> {
    Ok(session
        .get::<QuizState>(QUIZ_STATE_KEY)
        .await?
        .unwrap_or_default())
}

pub async fn save_quiz_state(session: &Session, state: &QuizState) -> Result<(), QuizError> {
    session.insert(QUIZ_STATE_KEY, state).await?;
    Ok(())
}

pub async fn active_vocabulary(
    session: &Session,
    default: &Arc<Vocabulary>,
) -> Result<ActiveVocabulary, QuizError> {
    let fallback = ActiveVocabulary {
        vocabulary: default.clone(),
        source: VocabularySource::Default,
    };

    let Some(uploaded) = session
        .get::<UploadedVocabulary>(UPLOADED_VOCABULARY_KEY)
        .await?
    else {
        return Ok(fallback);
    };

    match Vocabulary::new(uploaded.entries) {
        Ok(vocabulary) => Ok(ActiveVocabulary {
            vocabulary: Arc::new(vocabulary),
            source: VocabularySource::Uploaded {
                file_name: uploaded.file_name,
            },
        }),
        Err(e) => {
            log::warn!("Discarding unusable uploaded vocabulary: {}", e);
            session
                .remove::<UploadedVocabulary>(UPLOADED_VOCABULARY_KEY)
                .await?;
            Ok(fallback)
        }
    }
}

pub async fn set_uploaded_vocabulary(
    session: &Session,
    file_name: &str,
    vocabulary: Vocabulary,
) -> Result<(), QuizError> {
    let uploaded = UploadedVocabulary {
        file_name: file_name.to_string(),
        entries: vocabulary.into_entries(),
    };
    session.insert(UPLOADED_VOCABULARY_KEY, uploaded).await?;
    Ok(())
}

pub async fn clear_uploaded_vocabulary(session: &Session) -> Result<(), QuizError> {
    session
        .remove::<UploadedVocabulary>(UPLOADED_VOCABULARY_KEY)
        .await?;
    Ok(())
}

pub async fn set_flash(session: &Session, message: &str) -> Result<(), QuizError> {
    session.insert(FLASH_KEY, message).await?;
    Ok(())
}

/// Returns the pending flash message, if any, and clears it.
pub async fn take_flash(session: &Session) -> Option<String> {
    match session.remove::<String>(FLASH_KEY).await {
        Ok(message) => message,
        Err(e) => {
            log::error!("Failed to read flash message from session: {}", e);
            None
        }
    }
}
