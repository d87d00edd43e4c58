//! Turns cleaned resume text into the structured resume the editor
//! populates from.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::resume::ParsedResume;
use crate::parsing::prompts::STRUCTURE_SYSTEM;

/// Strategy seam for resume structuring. The production implementation is
/// LLM-backed; tests substitute a canned one.
#[async_trait]
pub trait ResumeStructurer: Send + Sync {
    async fn structure(&self, text: &str) -> Result<ParsedResume, AppError>;
}

pub struct LlmStructurer {
    llm: LlmClient,
}

impl LlmStructurer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeStructurer for LlmStructurer {
    async fn structure(&self, text: &str) -> Result<ParsedResume, AppError> {
        self.llm
            .call_json::<ParsedResume>(text, STRUCTURE_SYSTEM)
            .await
            .map_err(|e| AppError::Structuring(e.to_string()))
    }
}
