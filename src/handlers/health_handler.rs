use actix_web::{get, HttpResponse};
use chrono::Utc;

#[get("/api/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Flashcard Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/health",
            "generateQuiz": "POST /api/generate-quiz",
            "generateCards": "POST /api/generate-cards",
            "generateQuizFromDocument": "POST /api/generate-quiz-from-document",
            "generateCardsFromDocument": "POST /api/generate-cards-from-document",
            "createQuiz": "POST /api/quizzes",
            "getQuiz": "GET /api/quizzes/:quizId",
            "updateQuiz": "PUT /api/quizzes/:quizId",
            "deleteQuiz": "DELETE /api/quizzes/:quizId",
            "listQuizzes": "GET /api/quizzes"
        }
    }))
}
