//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::analysis::{analyze, AnalysisRequest, AnalysisResult};
use crate::errors::AppError;
use crate::extraction::extract_document;
use crate::llm_client::CompletionProvider;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_POSTING_FIELD: &str = "jobPosting";
/// Used when the browser sends a file part without a content type.
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// The resume as uploaded. Lives only for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub bytes: Bytes,
    pub media_type: String,
}

/// Extract, then analyze. Strictly sequential; nothing is retried or cached.
///
/// Inputs are validated before any extraction or network activity.
pub async fn submit_for_analysis(
    provider: &dyn CompletionProvider,
    document: Option<UploadedDocument>,
    job_posting: Option<String>,
) -> Result<AnalysisResult, AppError> {
    let document = document
        .ok_or_else(|| AppError::Validation(format!("'{RESUME_FIELD}' file is required")))?;
    if document.bytes.is_empty() {
        return Err(AppError::Validation(format!(
            "'{RESUME_FIELD}' file is empty"
        )));
    }
    let job_posting = job_posting
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::Validation(format!("'{JOB_POSTING_FIELD}' cannot be empty")))?;

    info!(
        media_type = %document.media_type,
        bytes = document.bytes.len(),
        "Extracting resume text"
    );
    let resume_text = extract_document(document.bytes, document.media_type).await?;

    let request = AnalysisRequest::new(job_posting, resume_text);
    Ok(analyze(provider, &request).await?)
}

/// POST /api/analyze
///
/// Multipart body: `resume` (file) and `jobPosting` (text). Returns `{ analysis }`.
#[tracing::instrument(skip_all, fields(analysis_id = %uuid::Uuid::new_v4()))]
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut document: Option<UploadedDocument> = None;
    let mut job_posting: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let media_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_MEDIA_TYPE)
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                document = Some(UploadedDocument { bytes, media_type });
            }
            Some(JOB_POSTING_FIELD) => {
                job_posting = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let result = submit_for_analysis(state.provider.as_ref(), document, job_posting).await?;
    Ok(Json(result))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}
