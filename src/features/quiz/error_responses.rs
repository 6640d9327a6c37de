use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tower_sessions::session::Error as SessionError;

use crate::data::models::QuizError;

impl From<SessionError> for QuizError {
    fn from(err: SessionError) -> Self {
        QuizError::Session(err.to_string())
    }
}

impl From<JsonRejection> for QuizError {
    fn from(rejection: JsonRejection) -> Self {
        QuizError::InvalidRequest(rejection.body_text())
    }
}

impl QuizError {
    pub fn status(&self) -> StatusCode {
        match self {
            QuizError::NoActiveQuestion | QuizError::AlreadyAnswered | QuizError::NotAnswered => {
                StatusCode::CONFLICT
            }
            QuizError::Vocabulary(_) | QuizError::Upload(_) | QuizError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            QuizError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        }

        let body = json!({
            "error": self.to_string(),
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::VocabError;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(QuizError::AlreadyAnswered.status(), StatusCode::CONFLICT);
        assert_eq!(QuizError::Vocabulary(VocabError::Empty).status(), StatusCode::BAD_REQUEST);
        assert_eq!(QuizError::Upload("no file".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            QuizError::Session("gone".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_carries_status_code() {
        let response = QuizError::NotAnswered.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
