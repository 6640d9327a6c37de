pub mod api;
pub mod quiz;
pub mod vocabulary;

use axum::response::Redirect;
use tower_sessions::Session;

use crate::{data::models::QuizError, utils};

/// Shows a user-facing error as a flash message on the next page instead of a JSON error body.
pub(crate) async fn redirect_with_flash(
    session: &Session,
    err: QuizError,
    to: &str,
) -> Result<Redirect, QuizError> {
    if !err.is_user_facing() {
        return Err(err);
    }
    log::info!("Rejected request: {}", err);
    utils::set_flash(session, &err.to_string()).await?;
    Ok(Redirect::to(to))
}
