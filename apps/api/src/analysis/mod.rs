// Analysis Requester: one system turn, one user turn, one provider call.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;

use serde::Serialize;
use tracing::info;

use crate::llm_client::{ChatMessage, CompletionProvider, LlmError};
use prompts::{ATS_ANALYSIS_SYSTEM, JOB_POSTING_LABEL, RESUME_LABEL};

/// Inputs to a single analysis. Built once extraction has succeeded.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub job_posting: String,
    pub resume_text: String,
}

/// The provider's report, passed through untouched.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub analysis: String,
}

impl AnalysisRequest {
    pub fn new(job_posting: impl Into<String>, resume_text: impl Into<String>) -> Self {
        Self {
            job_posting: job_posting.into(),
            resume_text: resume_text.into(),
        }
    }

    /// The user turn. Both inputs are interpolated byte-for-byte, with no escaping.
    pub fn user_turn(&self) -> String {
        format!(
            "\n\n{JOB_POSTING_LABEL} {}\n\n{RESUME_LABEL} {}",
            self.job_posting, self.resume_text
        )
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(ATS_ANALYSIS_SYSTEM),
            ChatMessage::user(self.user_turn()),
        ]
    }
}

/// Sends the request to the provider exactly once and returns the first
/// completion as the report. Any provider failure is returned as-is.
pub async fn analyze(
    provider: &dyn CompletionProvider,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, LlmError> {
    let analysis = provider.submit(&request.messages()).await?;

    info!(
        job_posting_chars = request.job_posting.len(),
        resume_chars = request.resume_text.len(),
        report_chars = analysis.len(),
        "Analysis completed"
    );

    Ok(AnalysisResult { analysis })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{ChatMessage, CompletionProvider, LlmError};

    /// Records every conversation it receives and answers with a canned result.
    pub struct StubProvider {
        reply: Box<dyn Fn() -> Result<String, LlmError> + Send + Sync>,
        pub calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl StubProvider {
        pub fn replying(text: &str) -> Self {
            let text = text.to_string();
            Self {
                reply: Box::new(move || Ok(text.clone())),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing_with_status(status: u16, message: &str) -> Self {
            let message = message.to_string();
            Self {
                reply: Box::new(move || {
                    Err(LlmError::Api {
                        status,
                        message: message.clone(),
                    })
                }),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn unauthenticated() -> Self {
            Self {
                reply: Box::new(|| Err(LlmError::Authentication("no key".to_string()))),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn last_call(&self) -> Option<Vec<ChatMessage>> {
            self.calls.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn submit(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            (self.reply)()
        }
    }
}
