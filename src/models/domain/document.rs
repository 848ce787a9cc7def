use std::fmt;

/// Media types the extractor understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Markdown,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "application/pdf" => Some(DocumentKind::Pdf),
            "text/plain" => Some(DocumentKind::PlainText),
            "text/markdown" | "text/x-markdown" => Some(DocumentKind::Markdown),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::PlainText),
            "md" | "markdown" => Some(DocumentKind::Markdown),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::PlainText => "text/plain",
            DocumentKind::Markdown => "text/markdown",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// A file received in an upload request. Lives for the duration of that request.
#[derive(Clone, Debug)]
pub struct UploadedDocument {
    pub bytes: Vec<u8>,
    pub declared_media_type: String,
    pub original_name: String,
}

impl UploadedDocument {
    pub fn new(
        bytes: impl Into<Vec<u8>>,
        declared_media_type: impl Into<String>,
        original_name: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            declared_media_type: declared_media_type.into(),
            original_name: original_name.into(),
        }
    }
}
