//! Plain-text extraction from uploaded documents.
//!
//! The summarizer only ever sees plain text. This module turns the supported
//! document formats into that text: PDF page texts are concatenated (a page
//! that fails to extract adds nothing), Word (DOCX) paragraphs are joined
//! with newlines.

mod docx;
mod pdf;

use crate::error::{GistError, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// MIME type of Word (DOCX) documents.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type of PDF documents.
pub const PDF_MIME: &str = "application/pdf";

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// UTF-8 plain text.
    PlainText,
    /// Portable Document Format.
    Pdf,
    /// Office Open XML word-processing document.
    Docx,
}

impl DocumentKind {
    /// Detects the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "txt" | "text" | "md" => Ok(DocumentKind::PlainText),
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(GistError::UnsupportedFormat(format!(
                "{} (expected .txt, .md, .pdf or .docx)",
                path.display()
            ))),
        }
    }

    /// Detects the format from a MIME type.
    pub fn from_mime(mime: &str) -> Result<Self> {
        match mime.trim() {
            "text/plain" | "text/markdown" => Ok(DocumentKind::PlainText),
            PDF_MIME => Ok(DocumentKind::Pdf),
            DOCX_MIME => Ok(DocumentKind::Docx),
            other => Err(GistError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Extracts plain text from document bytes.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String> {
    let text = match kind {
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec())
            .map_err(|e| GistError::Extraction(format!("text is not valid UTF-8: {}", e)))?,
        DocumentKind::Pdf => pdf::extract_pages(bytes)?,
        DocumentKind::Docx => docx::extract_paragraphs(bytes)?.join("\n"),
    };

    debug!("Extracted {} characters from {:?}", text.chars().count(), kind);
    Ok(text)
}

/// Reads a document from disk and extracts its plain text.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let kind = DocumentKind::from_path(path)?;
    let bytes = fs::read(path)?;
    extract_text(kind, &bytes)
}
