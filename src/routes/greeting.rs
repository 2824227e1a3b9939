//! src/routes/greeting.rs
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

pub const GREETING: &str = "HELLO WORLD";

pub async fn greet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(GREETING)
}
