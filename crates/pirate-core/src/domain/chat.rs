//! Chat-completion request and response types.
//!
//! Only the subset of the OpenAI chat-completion schema this adapter touches
//! is modeled: an ordered message list going out, and the first choice's text
//! coming back.

use serde::Deserialize;
use serde_json::{Value, json};

use super::provider::{AuthHeader, ProviderKind, classify_provider, resolve_chat_url};
use super::task::TaskPayload;
use crate::config::Credentials;

/// Literal prefix of every prompt sent to the model.
pub const PIRATE_PROMPT_PREFIX: &str = "Rewrite this task as a pirate: ";

/// Build the pirate rewrite prompt for `task`.
pub fn pirate_prompt(task: &str) -> String {
    format!("{PIRATE_PROMPT_PREFIX}{task}")
}

/// The role of a message sender. Only user messages are ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
}

impl MessageRole {
    /// Wire representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
        }
    }
}

/// A single role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// JSON body of an outbound chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// A single user message asking for a pirate rewrite of `task`.
    pub fn pirate(model: impl Into<String>, task: &str) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::user(pirate_prompt(task))],
        }
    }

    /// The request body as sent on the wire.
    pub fn to_json(&self) -> Value {
        let messages: Vec<Value> = self
            .messages
            .iter()
            .map(|m| json!({ "role": m.role.as_str(), "content": &m.content }))
            .collect();
        json!({ "model": &self.model, "messages": messages })
    }
}

/// Fully resolved outbound call: where to send it, how to authenticate, and
/// what to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundChatRequest {
    pub url: String,
    pub provider: ProviderKind,
    pub auth: AuthHeader,
    pub body: ChatCompletionRequest,
}

impl OutboundChatRequest {
    /// Derive the outbound request from a validated payload.
    ///
    /// The auth header is chosen from the *resolved* URL.
    pub fn build(credentials: &Credentials<'_>, payload: &TaskPayload, api_version: &str) -> Self {
        let url = resolve_chat_url(credentials.endpoint, &payload.model, api_version);
        let provider = classify_provider(&url);
        let auth = AuthHeader::for_url(&url, credentials.api_key);
        Self {
            url,
            provider,
            auth,
            body: ChatCompletionRequest::pirate(payload.model.clone(), &payload.task),
        }
    }
}

/// Text extracted from the first element of `choices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatChoice {
    /// `choices[0].message.content`
    MessageContent(String),
    /// `choices[0].text`
    PlainText(String),
    /// Neither shape was present.
    Unrecognized,
}

impl ChatChoice {
    /// The generated text, if a recognized shape was found.
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::MessageContent(text) | Self::PlainText(text) => Some(text),
            Self::Unrecognized => None,
        }
    }
}

// Variants are tried in declaration order.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoice {
    Message { message: RawMessage },
    Text { text: String },
    Other(serde::de::IgnoredAny),
}

#[derive(Deserialize)]
struct RawMessage {
    content: String,
}

#[derive(Deserialize)]
struct RawEnvelope {
    choices: Vec<RawChoice>,
}

/// A downstream chat-completion response body.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub parsed: Value,
}

impl ChatResponse {
    /// Parse the raw body as JSON.
    pub fn parse(raw_body: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            parsed: serde_json::from_str(raw_body)?,
        })
    }

    /// Decode the first choice into one of the known shapes.
    pub fn first_choice(&self) -> ChatChoice {
        let Ok(envelope) = RawEnvelope::deserialize(&self.parsed) else {
            return ChatChoice::Unrecognized;
        };
        match envelope.choices.into_iter().next() {
            Some(RawChoice::Message { message }) => ChatChoice::MessageContent(message.content),
            Some(RawChoice::Text { text }) => ChatChoice::PlainText(text),
            Some(RawChoice::Other(_)) | None => ChatChoice::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_of(value: &Value) -> ChatChoice {
        ChatResponse::parse(&value.to_string()).unwrap().first_choice()
    }

    #[test]
    fn test_pirate_prompt_prefix() {
        assert_eq!(
            pirate_prompt("buy milk"),
            "Rewrite this task as a pirate: buy milk"
        );
    }

    #[test]
    fn test_pirate_request_serializes_single_user_message() {
        let request = ChatCompletionRequest::pirate("o4-mini", "wash \"the\" deck");
        assert_eq!(
            request.to_json(),
            json!({
                "model": "o4-mini",
                "messages": [
                    {"role": "user", "content": "Rewrite this task as a pirate: wash \"the\" deck"}
                ]
            })
        );
    }

    #[test]
    fn test_outbound_request_for_azure_base() {
        let creds = Credentials {
            endpoint: "https://res.openai.azure.com/",
            api_key: "k",
        };
        let payload = TaskPayload {
            task: "swab".to_string(),
            model: "gpt-4o".to_string(),
        };
        let outbound = OutboundChatRequest::build(&creds, &payload, "2025-01-01-preview");
        assert_eq!(
            outbound.url,
            "https://res.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2025-01-01-preview"
        );
        assert_eq!(outbound.provider, ProviderKind::AzureStyle);
        assert_eq!(outbound.auth, AuthHeader::ApiKey("k".to_string()));
        assert_eq!(outbound.body.model, "gpt-4o");
    }

    #[test]
    fn test_outbound_request_for_generic_endpoint() {
        let creds = Credentials {
            endpoint: "https://api.example.com/v1/chat/completions",
            api_key: "k",
        };
        let payload = TaskPayload {
            task: "swab".to_string(),
            model: "llama".to_string(),
        };
        let outbound = OutboundChatRequest::build(&creds, &payload, "2025-01-01-preview");
        assert_eq!(outbound.url, "https://api.example.com/v1/chat/completions");
        assert_eq!(outbound.auth, AuthHeader::Bearer("k".to_string()));
    }

    #[test]
    fn test_message_content_shape() {
        let choice = choice_of(&json!({"choices": [{"message": {"content": "Arr!"}}]}));
        assert_eq!(choice, ChatChoice::MessageContent("Arr!".to_string()));
    }

    #[test]
    fn test_text_shape() {
        let choice = choice_of(&json!({"choices": [{"text": "Ahoy!"}]}));
        assert_eq!(choice, ChatChoice::PlainText("Ahoy!".to_string()));
    }

    #[test]
    fn test_message_wins_over_text() {
        let choice = choice_of(&json!({
            "choices": [{"message": {"role": "assistant", "content": "Arr!"}, "text": "Ahoy!"}]
        }));
        assert_eq!(choice, ChatChoice::MessageContent("Arr!".to_string()));
    }

    #[test]
    fn test_null_content_falls_back_to_text() {
        let choice = choice_of(&json!({
            "choices": [{"message": {"content": null}, "text": "Ahoy!"}]
        }));
        assert_eq!(choice, ChatChoice::PlainText("Ahoy!".to_string()));
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert_eq!(choice_of(&json!({})), ChatChoice::Unrecognized);
        assert_eq!(choice_of(&json!({"choices": []})), ChatChoice::Unrecognized);
        assert_eq!(
            choice_of(&json!({"choices": [{"message": {}}]})),
            ChatChoice::Unrecognized
        );
        assert_eq!(choice_of(&json!({"choices": "nope"})), ChatChoice::Unrecognized);
        assert_eq!(choice_of(&json!([1, 2, 3])), ChatChoice::Unrecognized);
    }

    #[test]
    fn test_only_first_choice_is_considered() {
        let choice = choice_of(&json!({"choices": [{}, {"text": "second"}]}));
        assert_eq!(choice, ChatChoice::Unrecognized);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(ChatResponse::parse("<html>oops</html>").is_err());
    }

    #[test]
    fn test_into_text() {
        assert_eq!(
            ChatChoice::PlainText("x".to_string()).into_text(),
            Some("x".to_string())
        );
        assert_eq!(ChatChoice::Unrecognized.into_text(), None);
    }
}
