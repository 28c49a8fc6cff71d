use super::ExtractionError;

/// Concatenates page text in document order.
///
/// `pdf-extract` emits page separators even for pages without text; a result
/// that is nothing but whitespace is reported as an empty document.
pub(super) fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    if text.trim().is_empty() {
        return Ok(String::new());
    }

    Ok(text)
}
