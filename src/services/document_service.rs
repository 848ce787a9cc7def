use crate::{
    errors::{AppError, AppResult},
    models::domain::{DocumentKind, UploadedDocument},
};

/// Turns an uploaded file into plain text.
///
/// The media type was already checked when the upload was accepted; it is
/// checked again here so the extractor never guesses at unknown formats.
/// A PDF without a text layer yields an empty string, which callers treat
/// as an empty document rather than an extraction failure.
pub fn extract_text(document: &UploadedDocument) -> AppResult<String> {
    let kind = DocumentKind::from_mime(&document.declared_media_type)
        .ok_or_else(|| AppError::UnsupportedMediaType(document.declared_media_type.clone()))?;

    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&document.bytes)
            .map_err(|e| AppError::ExtractionFailed(e.to_string())),
        DocumentKind::PlainText | DocumentKind::Markdown => {
            Ok(String::from_utf8_lossy(&document.bytes).into_owned())
        }
    }
}

/// Runs [`extract_text`] on the blocking pool. PDF decoding is CPU bound and
/// a decoder panic must not take the worker down with it.
pub async fn extract_text_blocking(document: UploadedDocument) -> AppResult<String> {
    tokio::task::spawn_blocking(move || extract_text(&document))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::ExtractionFailed("document could not be decoded".to_string())
            } else {
                AppError::InternalError(format!("extraction task failed: {}", e))
            }
        })?
}

/// Keeps at most `max_chars` characters. Cuts mid-word if it has to.
pub fn bound_text(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_round_trips() {
        let original = "Photosynthesis converts light into chemical energy.\nÜber 🌱";
        let document = UploadedDocument::new(original.as_bytes(), "text/plain", "bio.txt");
        assert_eq!(extract_text(&document).unwrap(), original);
    }

    #[test]
    fn markdown_is_returned_verbatim() {
        let original = "# Heading\n\n* item one\n* item two\n";
        let document = UploadedDocument::new(original.as_bytes(), "text/markdown", "notes.md");
        assert_eq!(extract_text(&document).unwrap(), original);
    }

    #[test]
    fn unsupported_type_fails_before_decoding() {
        let document = UploadedDocument::new(vec![0x89, 0x50, 0x4e, 0x47], "image/png", "x.png");
        match extract_text(&document) {
            Err(AppError::UnsupportedMediaType(mime)) => assert_eq!(mime, "image/png"),
            other => panic!("expected UnsupportedMediaType, got {:?}", other),
        }
    }

    #[test]
    fn garbage_pdf_is_an_extraction_failure() {
        let document = UploadedDocument::new(b"not a pdf at all".to_vec(), "application/pdf", "x.pdf");
        assert!(matches!(
            extract_text(&document),
            Err(AppError::ExtractionFailed(_))
        ));
    }

    #[actix_web::test]
    async fn blocking_extraction_matches_direct_call() {
        let document = UploadedDocument::new(b"hello".to_vec(), "text/plain", "a.txt");
        assert_eq!(extract_text_blocking(document).await.unwrap(), "hello");
    }

    #[test]
    fn bound_is_a_prefix_of_expected_length() {
        let text = "abcdefghij";
        for limit in [0, 1, 5, 10, 11, 100] {
            let bounded = bound_text(text, limit);
            assert_eq!(bounded.chars().count(), limit.min(text.chars().count()));
            assert!(text.starts_with(bounded));
        }
    }

    #[test]
    fn bound_counts_characters_not_bytes() {
        let text = "ééééé";
        assert_eq!(bound_text(text, 3), "ééé");
    }

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(bound_text("short", 8000), "short");
    }
}
