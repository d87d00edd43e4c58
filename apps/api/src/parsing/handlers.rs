//! The upload endpoint: accepts a multipart PDF, extracts and cleans its
//! text, and (when an LLM structurer is configured) returns the structured
//! resume the editor populates from.

use std::io::Write;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::formatter::scanner::format_parsed_text;
use crate::models::resume::ParsedResume;
use crate::parsing::pdf;
use crate::state::AppState;

const MULTIPART_FIELD: &str = "resume";

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    /// Cleaned plain text with `===`-underlined headings and `•` bullets.
    pub parsed_text: String,
    /// Server-side rendering of `parsed_text` for the display variant.
    pub formatted_html: String,
    /// Structured resume, present when an LLM structurer is configured and
    /// the parse succeeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<ParsedResume>,
}

/// POST /upload-resume
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() == Some(MULTIPART_FIELD) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(e.to_string()))?;
            file = Some((filename, data));
        }
    }

    let (filename, data) = file.ok_or_else(|| AppError::Validation("No file uploaded".into()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".into()));
    }
    if !has_pdf_extension(&filename) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF files are allowed".into(),
        ));
    }

    info!(filename = %filename, bytes = data.len(), "parsing uploaded resume");

    // Save, parse, delete: the temp file is removed on drop.
    let parsed_text = tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let mut tmp = tempfile::NamedTempFile::new()
            .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
        tmp.write_all(&data)
            .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
        pdf::parse_pdf(tmp.path())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::Error::new(e)))??;

    // Structuring is best-effort: the raw text variant still works when the
    // LLM is unavailable or returns something unusable.
    let parsed_data = match &state.structurer {
        Some(structurer) => match structurer.structure(&parsed_text).await {
            Ok(resume) => Some(resume),
            Err(e) => {
                warn!("resume structuring failed: {e}");
                None
            }
        },
        None => None,
    };

    let formatted_html = format_parsed_text(&parsed_text);

    Ok(Json(UploadResponse {
        message: "Resume uploaded and parsed successfully",
        parsed_text,
        formatted_html,
        parsed_data,
    }))
}

fn has_pdf_extension(filename: &str) -> bool {
    std::path::Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
