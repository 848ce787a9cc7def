pub mod generation_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_multipart::{form::MultipartFormConfig, MultipartError};
use actix_web::{error::PayloadError, web, HttpResponse};

use crate::{
    config::{MAX_JSON_BODY_BYTES, MAX_UPLOAD_BYTES},
    errors::{AppError, ErrorResponse},
};

pub use generation_handler::{
    generate_cards, generate_cards_from_document, generate_quiz, generate_quiz_from_document,
};
pub use health_handler::{health_check, index};
pub use quiz_handler::{create_quiz, delete_quiz, get_quiz, list_quizzes, update_quiz};

/// Registers every route plus the body extractor limits. Shared by `main`
/// and the HTTP tests so both serve the same table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(multipart_config())
        .service(health_check)
        .service(index)
        .service(generate_quiz_from_document)
        .service(generate_cards_from_document)
        .service(generate_quiz)
        .service(generate_cards)
        .service(list_quizzes)
        .service(create_quiz)
        .service(get_quiz)
        .service(update_quiz)
        .service(delete_quiz)
        .default_service(web::to(route_not_found));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn multipart_config() -> MultipartFormConfig {
    // Headroom over the file limit for the other form fields and part headers.
    MultipartFormConfig::default()
        .total_limit(MAX_UPLOAD_BYTES + 1024 * 1024)
        .memory_limit(MAX_UPLOAD_BYTES + 64 * 1024)
        .error_handler(|err, _req| upload_error(err).into())
}

fn upload_error(err: MultipartError) -> AppError {
    match err {
        MultipartError::Payload(PayloadError::Overflow) => AppError::ValidationError(format!(
            "File exceeds the {}MB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )),
        other => AppError::ValidationError(format!("Invalid upload: {}", other)),
    }
}

async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Not found".to_string(),
        code: 404,
    })
}
