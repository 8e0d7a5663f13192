use async_trait::async_trait;
use sentinel_config::AnalystConfig;
use sentinel_core::{Result, SentinelError};

use crate::wire::{Content, GenerateContentRequest, GenerateContentResponse};

/// Returned verbatim when no API key is configured. No network call is made.
pub const MISSING_KEY_MESSAGE: &str =
    "Error: API_KEY is missing in the environment variables. Please provide a valid key.";

/// Returned verbatim when the model answers with no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "No analysis generated.";

/// Returned verbatim when any underlying fault occurs.
pub const FAILURE_MESSAGE: &str =
    "An error occurred while communicating with the AI analysis engine.";

const SYSTEM_PROMPT: &str = "You are an expert Storage Systems Engineer assistant named \"Sentinel\". \
Your expertise covers SAN, NAS, Object Storage, RAID configurations, Data Encryption, and Disaster Recovery. \
You are analyzing system logs or answering technical questions about storage architecture. \
Be precise, technical, and concise. Highlight anomalies in logs if found.";

/// Transport seam for the completion call — tests substitute canned replies.
#[async_trait]
trait Completion: Send + Sync {
    /// The model's answer text, or `None` when the response carries none.
    async fn complete(&self, api_key: &str, system: &str, prompt: &str)
        -> Result<Option<String>>;
}

/// reqwest-backed transport for the generative-language REST API.
struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

#[async_trait]
impl Completion for HttpTransport {
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        prompt: &str,
    ) -> Result<Option<String>> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, api_key
        );
        let body = GenerateContentRequest {
            system_instruction: Content::from_text(system),
            contents: vec![Content::from_text(prompt)],
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SentinelError::Analyst(format!("request: {e}")))?
            .error_for_status()
            .map_err(|e| SentinelError::Analyst(format!("status: {e}")))?
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| SentinelError::Analyst(format!("decode: {e}")))?;

        Ok(response.into_text())
    }
}

/// Chat-style log analyst backed by a hosted completion model.
///
/// Every outcome is a displayable string — no error ever escapes to the
/// caller, each query is independent, and there is no retry policy.
pub struct LogAnalyst {
    transport: Box<dyn Completion>,
    api_key: Option<String>,
}

impl LogAnalyst {
    /// Build an analyst from config, reading the API key from the environment
    /// variable the config names. A missing or empty variable leaves the
    /// analyst keyless; queries then short-circuit locally.
    #[must_use]
    pub fn from_config(config: &AnalystConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            tracing::warn!(
                "No API key in ${}; analyst queries will be refused locally.",
                config.api_key_env
            );
        }

        Self {
            transport: Box::new(HttpTransport {
                http:     reqwest::Client::new(),
                endpoint: config.endpoint.clone(),
                model:    config.model.clone(),
            }),
            api_key,
        }
    }

    /// Answer `query` against the given log `context`.
    pub async fn analyze(&self, query: &str, context: &str) -> String {
        let Some(api_key) = &self.api_key else {
            return MISSING_KEY_MESSAGE.to_string();
        };

        let prompt = format!("Context (System Logs/Data):\n{context}\n\nUser Query:\n{query}\n");

        match self
            .transport
            .complete(api_key, SYSTEM_PROMPT, &prompt)
            .await
        {
            Ok(Some(text)) => text,
            Ok(None)       => EMPTY_RESPONSE_MESSAGE.to_string(),
            Err(e) => {
                tracing::error!("Analyst request failed: {e}");
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy)]
    enum Stub {
        Text(&'static str),
        Empty,
        Fault,
    }

    struct StubTransport {
        stub: Stub,
        calls: Arc<AtomicUsize>,
        last_prompt: Arc<Mutex<Option<String>>>,
    }

    #[async_trait]
    impl Completion for StubTransport {
        async fn complete(
            &self,
            _api_key: &str,
            _system: &str,
            prompt: &str,
        ) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match self.stub {
                Stub::Text(text) => Ok(Some(text.to_string())),
                Stub::Empty      => Ok(None),
                Stub::Fault      => Err(SentinelError::Analyst("simulated outage".to_string())),
            }
        }
    }

    struct Harness {
        analyst: LogAnalyst,
        calls: Arc<AtomicUsize>,
        last_prompt: Arc<Mutex<Option<String>>>,
    }

    fn harness(stub: Stub, api_key: Option<&str>) -> Harness {
        let calls = Arc::new(AtomicUsize::new(0));
        let last_prompt = Arc::new(Mutex::new(None));
        let analyst = LogAnalyst {
            transport: Box::new(StubTransport {
                stub,
                calls: Arc::clone(&calls),
                last_prompt: Arc::clone(&last_prompt),
            }),
            api_key: api_key.map(str::to_string),
        };
        Harness {
            analyst,
            calls,
            last_prompt,
        }
    }

    #[tokio::test]
    async fn missing_key_short_circuits_without_calling_out() {
        let h = harness(Stub::Text("unused"), None);

        let reply = h.analyst.analyze("why is latency up?", "ctx").await;

        assert_eq!(reply, MISSING_KEY_MESSAGE);
        assert_eq!(h.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn answer_text_passes_through_verbatim() {
        let h = harness(Stub::Text("X"), Some("key"));

        let reply = h.analyst.analyze("status?", "ctx").await;

        assert_eq!(reply, "X");
        assert_eq!(h.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_response_yields_fixed_fallback() {
        let h = harness(Stub::Empty, Some("key"));

        let reply = h.analyst.analyze("status?", "ctx").await;

        assert_eq!(reply, EMPTY_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn fault_yields_fixed_failure_message() {
        let h = harness(Stub::Fault, Some("key"));

        let reply = h.analyst.analyze("status?", "ctx").await;

        assert_eq!(reply, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn prompt_carries_context_and_query_sections() {
        let h = harness(Stub::Text("ok"), Some("key"));

        h.analyst
            .analyze("is the rebuild stuck?", "[log line one]")
            .await;

        let prompt = h.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.starts_with("Context (System Logs/Data):\n[log line one]"));
        assert!(prompt.contains("User Query:\nis the rebuild stuck?"));
    }
}
