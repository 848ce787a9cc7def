use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    middleware::get_request_id,
    models::{
        domain::{DocumentKind, GenerationRequest, ItemKind, UploadedDocument},
        dto::{
            request::{
                parse_form_count, DocumentUploadForm, GenerateCardsRequest, GenerateQuizRequest,
            },
            response::GenerationResponse,
        },
    },
};

#[post("/api/generate-quiz-from-document")]
pub async fn generate_quiz_from_document(
    req: HttpRequest,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<DocumentUploadForm>,
) -> Result<HttpResponse, AppError> {
    let count = parse_form_count(
        form.num_questions.as_ref(),
        ItemKind::QuizQuestion.default_count(),
    );
    generate_from_upload(&req, &state, form.file, ItemKind::QuizQuestion, count).await
}

#[post("/api/generate-cards-from-document")]
pub async fn generate_cards_from_document(
    req: HttpRequest,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<DocumentUploadForm>,
) -> Result<HttpResponse, AppError> {
    let count = parse_form_count(form.count.as_ref(), ItemKind::Flashcard.default_count());
    generate_from_upload(&req, &state, form.file, ItemKind::Flashcard, count).await
}

#[post("/api/generate-quiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner().normalized();
    request.validate()?;

    let count = request
        .num_questions
        .map(|n| n as usize)
        .unwrap_or_else(|| ItemKind::QuizQuestion.default_count());
    let topic = request.topic.unwrap_or_default();

    let outcome = state
        .generation_service
        .generate(GenerationRequest::from_topic(topic, ItemKind::QuizQuestion, count))
        .await?;
    Ok(HttpResponse::Ok().json(GenerationResponse::from(outcome)))
}

#[post("/api/generate-cards")]
pub async fn generate_cards(
    state: web::Data<AppState>,
    request: web::Json<GenerateCardsRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner().normalized();
    request.validate()?;

    let count = request
        .count
        .map(|n| n as usize)
        .unwrap_or_else(|| ItemKind::Flashcard.default_count());
    let topic = request.topic.unwrap_or_default();

    let outcome = state
        .generation_service
        .generate(GenerationRequest::from_topic(topic, ItemKind::Flashcard, count))
        .await?;
    Ok(HttpResponse::Ok().json(GenerationResponse::from(outcome)))
}

async fn generate_from_upload(
    req: &HttpRequest,
    state: &AppState,
    file: Option<Bytes>,
    item_kind: ItemKind,
    count: usize,
) -> Result<HttpResponse, AppError> {
    let document = accept_upload(file)?;
    log::info!(
        "[{}] Generating {} {} from document '{}' ({} bytes)",
        get_request_id(req).unwrap_or_else(|| "-".to_string()),
        count,
        item_kind,
        document.original_name,
        document.bytes.len()
    );

    let outcome = state
        .generation_service
        .generate(GenerationRequest::from_document(document, item_kind, count))
        .await?;
    Ok(HttpResponse::Ok().json(GenerationResponse::from(outcome)))
}

/// Upload boundary check: only PDF, plain text and markdown get through.
/// Clients that send no usable content type are judged by file extension.
fn accept_upload(file: Option<Bytes>) -> AppResult<UploadedDocument> {
    let file = file.ok_or_else(|| AppError::ValidationError("No file provided".to_string()))?;

    let file_name = file
        .file_name
        .clone()
        .unwrap_or_else(|| "document".to_string());
    let declared = file
        .content_type
        .as_ref()
        .map(|mime| mime.essence_str().to_string());

    let kind = match declared.as_deref() {
        None | Some("application/octet-stream") => DocumentKind::from_file_name(&file_name),
        Some(mime) => DocumentKind::from_mime(mime),
    }
    .ok_or_else(|| AppError::UnsupportedMediaType(declared.unwrap_or_else(|| "unknown".to_string())))?;

    Ok(UploadedDocument::new(file.data.to_vec(), kind.mime(), file_name))
}
