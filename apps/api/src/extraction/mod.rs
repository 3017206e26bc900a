//! Text extraction from uploaded documents (PDF, DOCX/DOC, TXT).
//!
//! Failures never surface as errors: they are logged and produce empty text,
//! which the analyzer reports as `ExtractionFailed`.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, error};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// Converts a stored document into plain text. Empty output means extraction failed.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> String;
}

/// Lowercased extension of `path`, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

pub fn is_supported(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Dispatches on file extension.
pub struct DocumentExtractor;

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, path: &Path) -> String {
        let result = match extension_of(path).as_deref() {
            Some("pdf") => extract_pdf(path).await,
            Some("docx") | Some("doc") => extract_docx(path).await,
            Some("txt") => extract_txt(path).await,
            other => {
                debug!("No extractor for extension {:?}", other);
                return String::new();
            }
        };

        match result {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                error!("Error extracting text from {}: {e:#}", path.display());
                String::new()
            }
        }
    }
}

async fn extract_pdf(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .context("PDF extraction task failed")?
        .context("parsing PDF")
}

async fn extract_txt(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

async fn extract_docx(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    tokio::task::spawn_blocking(move || docx_text(&bytes))
        .await
        .context("DOCX extraction task failed")?
}

/// Reads `word/document.xml` from an Office Open XML package, one line per paragraph.
/// Inside a run, `<w:tab/>` becomes a tab and `<w:br/>`/`<w:cr/>` a line break.
/// Legacy binary `.doc` files are not zip archives and fail here.
pub fn docx_text(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .context("not an Office Open XML document")?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .context("missing word/document.xml")?
        .read_to_string(&mut xml)
        .context("reading word/document.xml")?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event().context("malformed word/document.xml")? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    current.get_or_insert_with(String::new);
                }
                b"w:r" => in_run = true,
                b"w:t" => in_text = in_run,
                _ => {}
            },
            Event::Empty(e) => match (e.name().as_ref(), current.as_mut()) {
                (b"w:p", None) => paragraphs.push(String::new()),
                (b"w:tab", Some(paragraph)) if in_run => paragraph.push('\t'),
                (b"w:br" | b"w:cr", Some(paragraph)) if in_run => paragraph.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.push_str(&t.unescape().context("bad character reference")?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.extend(current.take()),
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if paragraphs.is_empty() {
        bail!("document has no paragraphs");
    }
    Ok(paragraphs.join("\n"))
}
