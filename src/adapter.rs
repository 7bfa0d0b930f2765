//! The request/response adapter (C7): walks the upstream chat-completion
//! shape, applying the masking engine to outbound text and the unmasking
//! engine to inbound text, leaving every other field untouched.

use serde_json::Value;

use crate::context::AppContext;
use crate::store::StoreError;

/// Masks the `content` of every message in an outbound `messages: [...]`
/// payload. `content` may be a bare string or a list of content parts with a
/// `type` discriminator (Anthropic's content-block shape); only `text`-kind
/// parts carry user-authored prose, so non-text parts (images, tool results)
/// pass through untouched either way.
pub async fn apply_outbound(ctx: &AppContext, mut body: Value) -> Result<Value, StoreError> {
    if let Some(messages) = body.get_mut("messages").and_then(Value::as_array_mut) {
        for message in messages {
            match message.get("content") {
                Some(Value::String(_)) => {
                    let content = message["content"].as_str().unwrap().to_owned();
                    let (masked, _delta) = ctx.masking().mask_text(&content).await?;
                    message["content"] = Value::String(masked);
                }
                Some(Value::Array(_)) => {
                    let parts = message["content"].as_array_mut().unwrap();
                    for part in parts {
                        let is_text = part.get("type").and_then(Value::as_str) == Some("text");
                        if !is_text {
                            continue;
                        }
                        if let Some(text) = part.get("text").and_then(Value::as_str) {
                            let (masked, _delta) = ctx.masking().mask_text(text).await?;
                            part["text"] = Value::String(masked);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    Ok(body)
}

/// Unmasks every `text`-kind content part of an upstream response.
pub async fn apply_inbound(ctx: &AppContext, mut body: Value) -> Result<Value, StoreError> {
    if let Some(parts) = body.get_mut("content").and_then(Value::as_array_mut) {
        for part in parts {
            let is_text = part.get("type").and_then(Value::as_str) == Some("text");
            if !is_text {
                continue;
            }
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                let restored = ctx.unmasking().unmask_text(text).await?;
                part["text"] = Value::String(restored);
            }
        }
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryMappingStore;
    use crate::upstream::UpstreamClient;
    use serde_json::json;
    use std::sync::Arc;

    fn ctx() -> AppContext {
        let store = Arc::new(InMemoryMappingStore::new());
        let upstream = UpstreamClient::new(&crate::config::UpstreamSettings {
            base_url: "http://localhost".into(),
            api_key: "test".into(),
            request_timeout_ms: 1000,
            model: "claude-test".into(),
        })
        .unwrap();
        AppContext::new(store, upstream, None)
    }

    #[tokio::test]
    async fn outbound_masks_message_content_only() {
        let ctx = ctx();
        let body = json!({
            "model": "claude-test",
            "messages": [
                {"role": "user", "content": "account 123456789012"}
            ]
        });

        let masked = apply_outbound(&ctx, body).await.unwrap();
        assert_eq!(masked["messages"][0]["content"], "account AWS_ACCOUNT_001");
        assert_eq!(masked["model"], "claude-test");
    }

    #[tokio::test]
    async fn outbound_masks_content_block_array() {
        let ctx = ctx();
        let body = json!({
            "messages": [
                {"role": "user", "content": [
                    {"type": "text", "text": "account 123456789012"},
                    {"type": "image", "source": {"data": "...base64..."}}
                ]}
            ]
        });

        let masked = apply_outbound(&ctx, body).await.unwrap();
        assert_eq!(masked["messages"][0]["content"][0]["text"], "account AWS_ACCOUNT_001");
        assert_eq!(masked["messages"][0]["content"][1]["type"], "image");
    }

    #[tokio::test]
    async fn inbound_unmasks_text_parts_and_skips_others() {
        let ctx = ctx();
        apply_outbound(&ctx, json!({"messages": [{"role": "user", "content": "account 123456789012"}]}))
            .await
            .unwrap();

        let response = json!({
            "content": [
                {"type": "text", "text": "Your account is AWS_ACCOUNT_001"},
                {"type": "tool_use", "name": "lookup", "input": {"id": "AWS_ACCOUNT_001"}}
            ]
        });

        let restored = apply_inbound(&ctx, response).await.unwrap();
        assert_eq!(restored["content"][0]["text"], "Your account is 123456789012");
        assert_eq!(restored["content"][1]["input"]["id"], "AWS_ACCOUNT_001");
    }
}
