use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{Instrument, debug, error, info_span};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());

    async move {
        debug!("received");

        let payload = match payload {
            Ok(Json(payload)) => payload,
            Err(rejection) => {
                debug!(%rejection, "unreadable chat body");
                return Err(AppError::PromptRequired);
            }
        };

        let Some(prompt) = payload.prompt() else {
            debug!("rejected: empty prompt");
            return Err(AppError::PromptRequired);
        };

        debug!("awaiting upstream");
        match generate_reply(state.generator.as_ref(), prompt).await {
            Ok(text) => {
                debug!("succeeded");
                Ok(Json(ChatResponse { text }))
            }
            Err(err) => {
                error!(error = %err, "upstream call failed");
                Err(AppError::Upstream(err))
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
