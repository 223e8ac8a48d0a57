//! Format-specific text extraction
//!
//! Extraction is dispatched on a classified file kind rather than ad-hoc
//! suffix checks, so the supported set is visible in one place.

use tracing::{error, warn};

use crate::errors::SummarizeError;

/// Returned for file types the worker cannot parse. This is not an error:
/// the sentinel itself is summarized, so the uploader still gets feedback.
pub const UNSUPPORTED_SENTINEL: &str = "Unsupported file; provide txt/pdf/docx.";

/// Supported document formats, classified by filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Pdf,
    Docx,
    Unsupported,
}

impl FileKind {
    /// Classify a filename by its suffix, case-insensitively.
    #[must_use]
    pub fn classify(filename: &str) -> Self {
        let name = filename.to_ascii_lowercase();
        if name.ends_with(".txt") || name.ends_with(".md") {
            FileKind::PlainText
        } else if name.ends_with(".pdf") {
            FileKind::Pdf
        } else if name.ends_with(".docx") {
            FileKind::Docx
        } else {
            FileKind::Unsupported
        }
    }
}

/// Extract plain text from the raw bytes of an uploaded document.
///
/// Plain-text and unsupported inputs never fail; PDF and DOCX parse failures
/// abort the invocation.
pub fn extract_text(filename: &str, content: &[u8]) -> Result<String, SummarizeError> {
    match FileKind::classify(filename) {
        FileKind::PlainText => Ok(String::from_utf8_lossy(content).into_owned()),
        FileKind::Pdf => extract_pdf(content),
        FileKind::Docx => extract_docx(content),
        FileKind::Unsupported => Ok(UNSUPPORTED_SENTINEL.to_string()),
    }
}

/// Extract text from a PDF using pdf-extract.
/// Wrapped in `catch_unwind` because the crate (and its font parsing) can
/// panic on malformed fonts/glyphs.
fn extract_pdf(content: &[u8]) -> Result<String, SummarizeError> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(content)
    })) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {}", e);
            Err(SummarizeError::ExtractError(format!(
                "PDF extraction failed: {}",
                e
            )))
        }
        Err(_panic) => {
            error!("PDF extraction panicked, likely a malformed font or glyph");
            Err(SummarizeError::ExtractError(
                "PDF extraction panicked, likely a malformed font or glyph".to_string(),
            ))
        }
    }
}

/// Extract text from a DOCX package: every paragraph in document order,
/// joined with newlines.
fn extract_docx(content: &[u8]) -> Result<String, SummarizeError> {
    let doc = docx_rs::read_docx(content)
        .map_err(|e| SummarizeError::ExtractError(format!("Failed to parse DOCX: {}", e)))?;

    let paragraphs: Vec<String> = doc
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        collect_paragraph_child(child, &mut out);
    }
    out
}

fn collect_paragraph_child(child: &docx_rs::ParagraphChild, out: &mut String) {
    match child {
        docx_rs::ParagraphChild::Run(run) => {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    out.push_str(&text.text);
                }
            }
        }
        docx_rs::ParagraphChild::Hyperlink(link) => {
            for nested in &link.children {
                collect_paragraph_child(nested, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_suffix_case_insensitively() {
        assert_eq!(FileKind::classify("notes.txt"), FileKind::PlainText);
        assert_eq!(FileKind::classify("README.MD"), FileKind::PlainText);
        assert_eq!(FileKind::classify("report.PDF"), FileKind::Pdf);
        assert_eq!(FileKind::classify("contract.Docx"), FileKind::Docx);
        assert_eq!(FileKind::classify("photo.png"), FileKind::Unsupported);
        assert_eq!(FileKind::classify("archive.docx.zip"), FileKind::Unsupported);
        assert_eq!(FileKind::classify("noextension"), FileKind::Unsupported);
    }

    #[test]
    fn plain_text_never_fails_on_invalid_utf8() {
        let bytes = [0xff, 0xfe, b'h', b'i', 0x80];
        let text = extract_text("broken.txt", &bytes).unwrap();
        assert!(text.contains("hi"));
    }

    #[test]
    fn markdown_is_decoded_verbatim() {
        let text = extract_text("doc.md", "# Title\nbody".as_bytes()).unwrap();
        assert_eq!(text, "# Title\nbody");
    }

    #[test]
    fn unsupported_suffix_yields_sentinel() {
        let text = extract_text("slides.pptx", b"whatever").unwrap();
        assert_eq!(text, UNSUPPORTED_SENTINEL);
    }

    #[test]
    fn malformed_docx_is_fatal() {
        let result = extract_text("bad.docx", b"not a zip archive");
        assert!(matches!(result, Err(SummarizeError::ExtractError(_))));
    }

    #[test]
    fn malformed_pdf_is_fatal_not_a_panic() {
        let result = extract_text("bad.pdf", b"%PDF-not really");
        assert!(matches!(result, Err(SummarizeError::ExtractError(_))));
    }
}
