//! Chat case.

use async_trait::async_trait;
use tracing::debug;

use super::fixtures::CHAT_MESSAGE;
use super::{ApiCase, CaseContext};
use crate::application::dto::ChatRequest;
use crate::check;
use crate::shared::error::HarnessResult;
use crate::shared::expect::{expect_success, non_empty_str};

/// TC004: a chat message yields a conversation id and a reply.
pub struct SendChatMessage;

#[async_trait]
impl ApiCase for SendChatMessage {
    fn id(&self) -> &'static str {
        "TC004"
    }

    fn title(&self) -> &'static str {
        "POST /api/chat answers a message"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let resp = ctx.client.chat(&ChatRequest::new(CHAT_MESSAGE)).await?;
        check!(
            resp.status.is_success(),
            "Chat request failed with status {}: {}",
            resp.status.as_u16(),
            resp.snippet()
        );

        let body = resp.object()?;
        expect_success(&body)?;
        let conversation_id = non_empty_str(&body, "conversationId")?;
        let reply = non_empty_str(&body, "response")?;

        // Workflow preview is optional
        if let Some(workflow) = body.get("workflow") {
            check!(
                workflow.is_object(),
                "'workflow' should be an object if present, got {}",
                workflow
            );
        }

        debug!(conversation_id = %conversation_id, reply_len = reply.len(), "Chat replied");
        Ok(())
    }
}
