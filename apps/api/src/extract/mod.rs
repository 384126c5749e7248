//! Document extraction — turns an uploaded byte stream into plain text.
//!
//! Any type implementing `DocumentExtractor` is an acceptable extractor;
//! concrete implementations are selected through `ExtractorRegistry`, keyed
//! on file extension. PDF decoding is CPU-bound and runs inside
//! `tokio::task::spawn_blocking` so it never stalls the async executor.

use anyhow::anyhow;
use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

/// An uploaded file: raw byte payload plus the client-declared filename.
/// Used only to select an extractor; discarded after extraction.
#[derive(Debug, Clone)]
pub struct RawDocument {
    file_name: String,
    bytes: Bytes,
}

impl RawDocument {
    pub fn new(file_name: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

/// The kinds of document the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

/// Extraction contract: `is_type` is a pure, case-insensitive suffix match;
/// `extract_text` fails with `UnsupportedFormat` when `is_type` is false for
/// the dispatched variant.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    fn kind(&self) -> DocumentKind;

    fn is_type(&self, file_name: &str) -> bool;

    async fn extract_text(&self, doc: &RawDocument) -> Result<String, AppError>;
}

/// PDF extractor. Decodes the full payload on a blocking worker thread and
/// concatenates the text of every page in page order. A zero-byte upload
/// short-circuits to an empty string before the decoder runs.
pub struct PdfExtractor;

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn is_type(&self, file_name: &str) -> bool {
        file_name.to_lowercase().ends_with(".pdf")
    }

    async fn extract_text(&self, doc: &RawDocument) -> Result<String, AppError> {
        if !self.is_type(doc.file_name()) {
            return Err(AppError::UnsupportedFormat(format!(
                "Unsupported file type: {}",
                doc.file_name()
            )));
        }

        if doc.bytes().is_empty() {
            return Ok(String::new());
        }

        let bytes = doc.bytes().to_vec();

        // CPU-bound decode — spawn_blocking to avoid blocking the async executor.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow!("spawn_blocking failed in PDF extraction: {e}"))
            })?
            .map_err(|e| AppError::Decode(format!("could not extract text from PDF: {e}")))?;

        Ok(text)
    }
}

/// Plain-text extractor. Decodes the byte payload as UTF-8.
pub struct TxtExtractor;

#[async_trait]
impl DocumentExtractor for TxtExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Text
    }

    fn is_type(&self, file_name: &str) -> bool {
        file_name.to_lowercase().ends_with(".txt")
    }

    async fn extract_text(&self, doc: &RawDocument) -> Result<String, AppError> {
        if !self.is_type(doc.file_name()) {
            return Err(AppError::UnsupportedFormat(format!(
                "Unsupported file type: {}",
                doc.file_name()
            )));
        }

        String::from_utf8(doc.bytes().to_vec())
            .map_err(|e| AppError::Decode(format!("upload is not valid UTF-8: {e}")))
    }
}

/// Registry of available extractors. Endpoints request the variant their
/// contract pins; `for_file` dispatches on the filename for generic callers.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn DocumentExtractor>>,
}

impl ExtractorRegistry {
    /// The standard registry: PDF and plain text.
    pub fn standard() -> Self {
        Self {
            extractors: vec![Box::new(PdfExtractor), Box::new(TxtExtractor)],
        }
    }

    pub fn get(&self, kind: DocumentKind) -> &dyn DocumentExtractor {
        self.extractors
            .iter()
            .find(|e| e.kind() == kind)
            .map(|e| e.as_ref())
            .expect("standard registry covers every DocumentKind")
    }

    /// Returns the extractor whose suffix matches `file_name`, if any.
    /// A filename with no recognized extension has no extractor.
    pub fn for_file(&self, file_name: &str) -> Option<&dyn DocumentExtractor> {
        self.extractors
            .iter()
            .find(|e| e.is_type(file_name))
            .map(|e| e.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, payload: &[u8]) -> RawDocument {
        RawDocument::new(name, Bytes::copy_from_slice(payload))
    }

    #[test]
    fn test_is_type_case_insensitive_pdf() {
        assert!(PdfExtractor.is_type("r.pdf"));
        assert!(PdfExtractor.is_type("R.PDF"));
        assert!(PdfExtractor.is_type("Resume.Pdf"));
    }

    #[test]
    fn test_is_type_case_insensitive_txt() {
        assert!(TxtExtractor.is_type("jd.txt"));
        assert!(TxtExtractor.is_type("JD.TXT"));
    }

    #[test]
    fn test_is_type_rejects_other_extensions() {
        assert!(!PdfExtractor.is_type("resume.docx"));
        assert!(!TxtExtractor.is_type("resume.pdf"));
    }

    #[test]
    fn test_filename_without_extension_is_unsupported() {
        assert!(!PdfExtractor.is_type("resume"));
        assert!(!TxtExtractor.is_type("resume"));
        let registry = ExtractorRegistry::standard();
        assert!(registry.for_file("resume").is_none());
    }

    #[test]
    fn test_registry_dispatches_on_extension() {
        let registry = ExtractorRegistry::standard();
        assert_eq!(
            registry.for_file("cv.PDF").map(|e| e.kind()),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            registry.for_file("jd.txt").map(|e| e.kind()),
            Some(DocumentKind::Text)
        );
        assert!(registry.for_file("cv.docx").is_none());
    }

    #[tokio::test]
    async fn test_txt_round_trip_preserves_content() {
        let source = "Senior Rust Engineer\nOwns distributed systems.\n";
        let extracted = TxtExtractor
            .extract_text(&doc("jd.txt", source.as_bytes()))
            .await
            .unwrap();
        assert_eq!(extracted, source);
        assert_eq!(extracted.as_bytes(), source.as_bytes());
    }

    #[tokio::test]
    async fn test_zero_byte_upload_yields_empty_string() {
        let pdf = PdfExtractor.extract_text(&doc("r.pdf", b"")).await.unwrap();
        assert_eq!(pdf, "");

        let txt = TxtExtractor.extract_text(&doc("jd.txt", b"")).await.unwrap();
        assert_eq!(txt, "");
    }

    #[tokio::test]
    async fn test_extract_text_on_wrong_extension_is_unsupported_format() {
        let err = PdfExtractor
            .extract_text(&doc("resume.docx", b"payload"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));

        let err = TxtExtractor
            .extract_text(&doc("jd.md", b"payload"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(_)));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decode_error() {
        let err = TxtExtractor
            .extract_text(&doc("jd.txt", &[0xff, 0xfe, 0x00]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[tokio::test]
    async fn test_garbage_pdf_payload_is_decode_error() {
        let err = PdfExtractor
            .extract_text(&doc("r.pdf", b"not a pdf at all"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
