// src/api/handlers/index.rs
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

/// Serve the generator front end
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
