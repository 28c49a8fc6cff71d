//! Text Extractor: turns an uploaded resume into plain text.
//!
//! Dispatch is on the *declared* media type only. The bytes are never sniffed:
//! a PDF uploaded as `text/plain` is rejected exactly like a PNG.
//!
//! Both parsers are CPU-bound and can panic on hostile input, so the async
//! entry point `extract_document` runs them on the blocking pool and reports a
//! panicked task as an extraction failure. A task that is cancelled rather than
//! panicking is a server fault, not a property of the document.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

mod pdf;
mod word;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MSWORD_MEDIA_TYPE: &str = "application/msword";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read Word document: {0}")]
    Word(String),

    #[error("Extraction aborted: {0}")]
    Aborted(String),

    #[error("Extraction task did not complete: {0}")]
    Cancelled(String),
}

/// The extraction strategy selected for a declared media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    WordDocument,
}

impl DocumentKind {
    /// Resolves a declared media type. Parameters (`; charset=...`) and case are ignored.
    pub fn from_media_type(media_type: &str) -> Result<Self, ExtractionError> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            PDF_MEDIA_TYPE => Ok(DocumentKind::Pdf),
            DOCX_MEDIA_TYPE | MSWORD_MEDIA_TYPE => Ok(DocumentKind::WordDocument),
            _ => Err(ExtractionError::UnsupportedMediaType(media_type.to_string())),
        }
    }
}

/// Extracts plain text from `bytes` according to `media_type`.
///
/// An empty but well-formed document yields `""`, which callers pass through
/// unchanged.
pub fn extract(bytes: &[u8], media_type: &str) -> Result<String, ExtractionError> {
    let kind = DocumentKind::from_media_type(media_type)?;

    let text = match kind {
        DocumentKind::Pdf => pdf::extract_text(bytes)?,
        DocumentKind::WordDocument => word::extract_text(bytes)?,
    };

    debug!(?kind, chars = text.len(), "Extracted document text");
    Ok(text)
}

/// Async wrapper around [`extract`] that keeps parsing off the async executor.
///
/// The media type is resolved before the blocking task is spawned, so an
/// unsupported upload never reaches a parser.
pub async fn extract_document(bytes: Bytes, media_type: String) -> Result<String, ExtractionError> {
    DocumentKind::from_media_type(&media_type)?;

    tokio::task::spawn_blocking(move || extract(&bytes, &media_type))
        .await
        .map_err(|e| {
            if e.is_panic() {
                ExtractionError::Aborted("the document could not be parsed".to_string())
            } else {
                ExtractionError::Cancelled(e.to_string())
            }
        })?
}
