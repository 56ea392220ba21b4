//! Hosted model invocation.
//!
//! The wire format is the Anthropic messages contract as exposed by
//! Bedrock's `InvokeModel`: a versioned JSON request in, a JSON envelope
//! with content parts out.

mod bedrock;

pub use bedrock::BedrockInvoker;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Protocol version tag required by the model service.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Token budget for every summary.
pub const MAX_TOKENS: u32 = 400;

/// Content type used for both request and response bodies.
pub const JSON_MIME: &str = "application/json";

/// Trait for model service clients.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Submit a serialized request body and return the raw response body.
    ///
    /// Exactly one attempt is made per call.
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// Request payload for a single-turn message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// A typed content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub part_type: String,
    pub text: String,
}

impl ModelRequest {
    /// Build a request holding one user message with a single text part.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![ContentPart {
                    part_type: "text".to_string(),
                    text: text.into(),
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = ModelRequest::user_text("סכם");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": 400,
                "messages": [
                    {"role": "user", "content": [{"type": "text", "text": "סכם"}]}
                ]
            })
        );
    }
}
