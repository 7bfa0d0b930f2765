//! `POST /v1/messages`: chat passthrough. Masks outbound message content,
//! forwards to the upstream Claude API, unmasks the response content.

use axum::extract::Extension;
use axum::Json;
use serde_json::Value;

use crate::adapter::{apply_inbound, apply_outbound};
use crate::context::AppContext;
use crate::error::AppError;

pub async fn create(
    Extension(ctx): Extension<AppContext>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    if !body.get("messages").is_some_and(Value::is_array) {
        return Err(AppError::BadRequest(
            "request body must have a `messages` array".to_owned(),
        ));
    }

    let masked_request = apply_outbound(&ctx, body).await?;
    let response = ctx.upstream().send_messages(masked_request).await?;
    let unmasked_response = apply_inbound(&ctx, response).await?;

    Ok(Json(unmasked_response))
}
