//! Paragraph text from Word (DOCX) documents.

use crate::error::{GistError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

// Either an empty paragraph or a paragraph with its body
static PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>(.*?)</w:p>").unwrap()
});

// Text runs and tabs inside a paragraph, in order
static RUN_CONTENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:tab(?:\s[^>]*)?/>").unwrap()
});

static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(amp|lt|gt|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);").unwrap());

/// Extracts the text of every body paragraph, in document order.
pub(super) fn extract_paragraphs(bytes: &[u8]) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| GistError::Extraction(format!("{} missing: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)?;

    Ok(paragraphs_from_xml(&xml))
}

fn paragraphs_from_xml(xml: &str) -> Vec<String> {
    PARAGRAPH
        .captures_iter(xml)
        .map(|paragraph| match paragraph.get(1) {
            Some(body) => paragraph_text(body.as_str()),
            None => String::new(),
        })
        .collect()
}

fn paragraph_text(body: &str) -> String {
    let mut text = String::new();
    for run in RUN_CONTENT.captures_iter(body) {
        match run.get(1) {
            Some(content) => text.push_str(&unescape(content.as_str())),
            None => text.push('\t'),
        }
    }
    text
}

fn unescape(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .unwrap_or_else(|| entity[1..].parse())
                    .ok()
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}
