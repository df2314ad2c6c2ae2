//! HTTP client for the generative-AI counselor service.

use crate::error::CounselorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default counselor API base URL.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Standing instruction sent with every counselor request.
const SYSTEM_INSTRUCTION: &str = "Be professional, encouraging, and informative. \
    Help parents and students understand which institutes are better based on \
    their verified results and fee structure. Keep responses concise and \
    formatted with clear bullet points where necessary.";

/// Shown when the service replies but the body carries no text.
const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that request right now.";

/// Shown when the request fails outright.
const ERROR_FALLBACK: &str =
    "I encountered an error connecting to my knowledge base. Please try again in a moment.";

/// Counselor service configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CounselorConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for CounselorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: String::new(),
        }
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    contents: String,
    system_instruction: &'a str,
    temperature: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    text: Option<String>,
}

/// Client for the external counselor service.
///
/// The only asynchronous component in the system; no retry, no state.
pub struct CounselorClient {
    config: CounselorConfig,
    client: reqwest::Client,
}

impl CounselorClient {
    pub fn new(config: CounselorConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Client pointing at a custom base URL with defaults elsewhere.
    pub fn with_url(base_url: &str) -> Self {
        Self::new(CounselorConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..CounselorConfig::default()
        })
    }

    /// Assemble the full prompt from the user question and registry
    /// context.
    fn compose_prompt(&self, user_prompt: &str, context: &str) -> String {
        format!(
            "You are an expert Education Counselor for JEE and NEET students in India.\n\
             Current context: {context}.\n\
             User question: {user_prompt}"
        )
    }

    /// Forward a prompt to the counselor and return the reply text.
    ///
    /// Never fails: any transport, status, or decode error is logged and
    /// replaced with an apology string, and an empty reply body gets its
    /// own fallback.
    pub async fn ask(&self, user_prompt: &str, context: &str) -> String {
        match self.request(user_prompt, context).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_REPLY_FALLBACK.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "counselor request failed");
                ERROR_FALLBACK.to_string()
            }
        }
    }

    async fn request(
        &self,
        user_prompt: &str,
        context: &str,
    ) -> Result<Option<String>, CounselorError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let body = GenerateRequest {
            model: &self.config.model,
            contents: self.compose_prompt(user_prompt, context),
            system_instruction: SYSTEM_INSTRUCTION,
            temperature: 0.7,
        };

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| CounselorError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CounselorError::Status {
                status: resp.status().as_u16(),
            });
        }

        let reply: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| CounselorError::Decode(e.to_string()))?;
        Ok(reply.text.filter(|t| !t.is_empty()))
    }
}

impl Default for CounselorClient {
    fn default() -> Self {
        Self::new(CounselorConfig::default())
    }
}
