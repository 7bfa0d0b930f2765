//! `POST /v1/agent`: agent passthrough. Masks the prompt alone, forwards it
//! as a single-turn chat completion, and unmasks the resulting text.

use axum::extract::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct AgentRequest {
    pub prompt: String,
    #[serde(default)]
    pub allowed_tools: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub response: String,
}

pub async fn create(
    Extension(ctx): Extension<AppContext>,
    Json(req): Json<AgentRequest>,
) -> Result<Json<AgentResponse>, AppError> {
    let (masked_prompt, _) = ctx.masking().mask_text(&req.prompt).await?;

    let request = json!({
        "messages": [{"role": "user", "content": masked_prompt}],
        "metadata": {"allowed_tools": req.allowed_tools},
    });

    let response = ctx.upstream().send_messages(request).await?;
    let masked_text = first_text_part(&response).unwrap_or_default();
    let response = AgentResponse {
        response: ctx.unmasking().unmask_text(&masked_text).await?,
    };

    Ok(Json(response))
}

fn first_text_part(response: &Value) -> Option<String> {
    response
        .get("content")?
        .as_array()?
        .iter()
        .find(|part| part.get("type").and_then(Value::as_str) == Some("text"))?
        .get("text")?
        .as_str()
        .map(str::to_owned)
}
