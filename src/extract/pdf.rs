//! Page-by-page text from PDF documents.

use crate::error::{GistError, Result};
use log::warn;
use pdf_extract::{output_doc_page, Document, PlainTextOutput};
use std::fmt::Display;

/// Extracts the text of every page and concatenates it in page order.
///
/// A page that fails to extract contributes an empty string. Only a document
/// that cannot be loaded at all is an error.
pub(super) fn extract_pages(bytes: &[u8]) -> Result<String> {
    let mut document = Document::load_mem(bytes)
        .map_err(|e| GistError::Extraction(format!("PDF could not be loaded: {}", e)))?;
    if document.is_encrypted() {
        document
            .decrypt("")
            .map_err(|e| GistError::Extraction(format!("PDF is encrypted: {}", e)))?;
    }

    let pages = document
        .get_pages()
        .into_keys()
        .map(|number| (number, page_text(&document, number)));
    Ok(join_pages(pages))
}

fn page_text(document: &Document, number: u32) -> std::result::Result<String, String> {
    let mut text = String::new();
    {
        let mut output = PlainTextOutput::new(&mut text);
        output_doc_page(document, &mut output, number).map_err(|e| format!("{:?}", e))?;
    }
    Ok(text)
}

fn join_pages<I, E>(pages: I) -> String
where
    I: IntoIterator<Item = (u32, std::result::Result<String, E>)>,
    E: Display,
{
    let mut text = String::new();
    for (number, page) in pages {
        match page {
            Ok(page) => text.push_str(&page),
            Err(e) => warn!("Skipping PDF page {}: {}", number, e),
        }
    }
    text
}
