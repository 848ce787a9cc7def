use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateQuizRequest, UpdateQuizRequest},
        response::{
            CreateQuizResponse, DeleteQuizResponse, GetQuizResponse, ListQuizzesResponse,
            QuizSummaryDto, UpdateQuizResponse,
        },
    },
};

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let quiz = state
        .quiz_service
        .create_quiz(request.title, request.questions)
        .await?;

    Ok(HttpResponse::Created().json(CreateQuizResponse {
        success: true,
        quiz_id: quiz.quiz_id,
        message: "Quiz created successfully".to_string(),
    }))
}

#[get("/api/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&quiz_id).await?;
    Ok(HttpResponse::Ok().json(GetQuizResponse::from(quiz)))
}

#[put("/api/quizzes/{quiz_id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    request: web::Json<UpdateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(&quiz_id, request.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(UpdateQuizResponse {
        success: true,
        message: "Quiz updated successfully".to_string(),
        quiz_id: quiz.quiz_id,
    }))
}

#[delete("/api/quizzes/{quiz_id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.delete_quiz(&quiz_id).await?;

    Ok(HttpResponse::Ok().json(DeleteQuizResponse {
        success: true,
        message: "Quiz deleted successfully".to_string(),
    }))
}

#[get("/api/quizzes")]
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.list_quizzes().await?;

    Ok(HttpResponse::Ok().json(ListQuizzesResponse {
        success: true,
        quizzes: quizzes.iter().map(QuizSummaryDto::from).collect(),
    }))
}
