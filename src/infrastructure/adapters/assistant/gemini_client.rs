//! Gemini Client - 调用 Gemini generateContent REST API
//!
//! 同时实现 TextRefinerPort、PromptGeneratorPort、IllustratorPort
//!
//! 外部 API:
//! POST {base_url}/v1beta/models/{model}:generateContent
//! Header: x-goog-api-key
//! Request: {"contents": [{"parts": [{"text": "..."}]}], "generationConfig": {...}}
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."} | {"inlineData": {...}}]}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

use crate::application::ports::{
    AssistantError, GeneratedPrompt, IllustratorPort, PromptGeneratorPort, TextRefinerPort,
};
use crate::domain::story::PromptCategory;

/// Gemini 客户端配置
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// API 基础 URL
    pub base_url: String,
    pub api_key: String,
    /// 润色和生成提示使用的模型
    pub text_model: String,
    /// 插图模型
    pub image_model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            text_model: "gemini-3-flash-preview".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            timeout_secs: 60,
        }
    }
}

impl GeminiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .first()
            .into_iter()
            .flat_map(|c| c.content.parts.iter())
    }

    /// 拼接所有文本 part
    fn text(&self) -> Option<String> {
        let text: String = self.parts().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }

    /// 第一个内联图片
    fn inline_image(&self) -> Option<&InlineData> {
        self.parts().find_map(|p| p.inline_data.as_ref())
    }
}

/// 结构化输出中的提示
#[derive(Debug, Deserialize)]
struct PromptPayload {
    question: String,
    category: String,
}

// ============================================================================
// Prompts
// ============================================================================

fn refine_instruction(text: &str) -> String {
    format!(
        "Please refine and proofread this personal story for a legacy book. \
         Maintain the author's original voice but improve flow, clarity, and grammar.\n\
         ---\nStory: {}\n---",
        text
    )
}

fn prompt_instruction(existing_questions: &[String]) -> String {
    format!(
        "Generate a new, thoughtful biographical writing prompt for someone writing their life story.\n\
         Avoid these existing questions: {}.\n\
         The question should be open-ended and evoke deep memories.",
        existing_questions.join(", ")
    )
}

fn illustration_instruction(snippet: &str) -> String {
    format!(
        "A nostalgic, warm, painterly illustration for a family history book based on this story: {}. \
         Soft lighting, heartwarming, oil painting style.",
        snippet
    )
}

fn prompt_generation_config() -> Value {
    let categories: Vec<&str> = PromptCategory::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "responseMimeType": "application/json",
        "responseSchema": {
            "type": "OBJECT",
            "properties": {
                "question": { "type": "STRING" },
                "category": { "type": "STRING", "enum": categories }
            },
            "required": ["question", "category"]
        }
    })
}

fn image_generation_config() -> Value {
    json!({ "imageConfig": { "aspectRatio": "4:3" } })
}

fn parse_prompt(text: &str) -> Result<GeneratedPrompt, AssistantError> {
    let payload: PromptPayload = serde_json::from_str(text)
        .map_err(|e| AssistantError::InvalidResponse(format!("Malformed prompt JSON: {}", e)))?;
    let category = PromptCategory::from_str(&payload.category).ok_or_else(|| {
        AssistantError::InvalidResponse(format!("Unknown category: {}", payload.category))
    })?;
    Ok(GeneratedPrompt {
        question: payload.question,
        category,
    })
}

// ============================================================================
// Client
// ============================================================================

/// Gemini 客户端
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistantError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate_content(
        &self,
        model: &str,
        text: String,
        generation_config: Option<Value>,
    ) -> Result<GenerateContentResponse, AssistantError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text),
                    inline_data: None,
                }],
            }],
            generation_config,
        };

        tracing::debug!(url = %self.generate_url(model), model = %model, "Sending generateContent request");

        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssistantError::Timeout
                } else if e.is_connect() {
                    AssistantError::NetworkError(format!("Cannot connect to Gemini: {}", e))
                } else {
                    AssistantError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AssistantError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| AssistantError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl TextRefinerPort for GeminiClient {
    async fn refine(&self, text: &str) -> Result<String, AssistantError> {
        let response = self
            .generate_content(&self.config.text_model, refine_instruction(text), None)
            .await?;
        response.text().ok_or(AssistantError::EmptyResponse)
    }
}

#[async_trait]
impl PromptGeneratorPort for GeminiClient {
    async fn generate_prompt(&self, existing_questions: &[String]) -> Result<GeneratedPrompt, AssistantError> {
        let response = self
            .generate_content(
                &self.config.text_model,
                prompt_instruction(existing_questions),
                Some(prompt_generation_config()),
            )
            .await?;
        let text = response.text().ok_or(AssistantError::EmptyResponse)?;
        parse_prompt(&text)
    }
}

#[async_trait]
impl IllustratorPort for GeminiClient {
    async fn generate_image(&self, snippet: &str) -> Result<String, AssistantError> {
        let response = self
            .generate_content(
                &self.config.image_model,
                illustration_instruction(snippet),
                Some(image_generation_config()),
            )
            .await?;

        let image = response.inline_image().ok_or(AssistantError::EmptyResponse)?;
        tracing::info!(
            mime_type = ?image.mime_type,
            encoded_size = image.data.len(),
            "Gemini image generated"
        );
        Ok(format!("data:image/png;base64,{}", image.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GeminiClientConfig::default();
        assert_eq!(config.text_model, "gemini-3-flash-preview");
        assert_eq!(config.image_model, "gemini-2.5-flash-image");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_generate_url() {
        let mut config = GeminiClientConfig::new("key");
        config.base_url = "http://localhost:9000/".to_string();
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.generate_url("gemini-3-flash-preview"),
            "http://localhost:9000/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some("hello".into()),
                    inline_data: None,
                }],
            }],
            generation_config: Some(image_generation_config()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["imageConfig"]["aspectRatio"], "4:3");
        assert!(value["contents"][0]["parts"][0].get("inlineData").is_none());
    }

    #[test]
    fn test_response_text_and_image() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here you go"},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw0KGgo="}}
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Here you go"));
        assert_eq!(response.inline_image().map(|i| i.data.as_str()), Some("iVBORw0KGgo="));

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.text().is_none());
        assert!(empty.inline_image().is_none());
    }

    #[test]
    fn test_parse_prompt() {
        let prompt = parse_prompt(r#"{"question": "Who was your mentor?", "category": "Career"}"#).unwrap();
        assert_eq!(prompt.category, PromptCategory::Career);

        assert!(matches!(
            parse_prompt(r#"{"question": "Q", "category": "Hobbies"}"#),
            Err(AssistantError::InvalidResponse(_))
        ));
        assert!(matches!(parse_prompt("not json"), Err(AssistantError::InvalidResponse(_))));
    }

    #[test]
    fn test_prompt_schema_lists_categories() {
        let config = prompt_generation_config();
        assert_eq!(config["responseSchema"]["properties"]["category"]["enum"][4], "Wisdom");
    }
}
