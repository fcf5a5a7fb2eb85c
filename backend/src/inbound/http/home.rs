//! Landing page with forms for the exercise API.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

const INDEX_HTML: &str = include_str!("../../../views/index.html");

/// Serve the landing page.
#[utoipa::path(
    get,
    path = "/",
    tags = ["home"],
    responses((status = 200, description = "HTML landing page", body = String, content_type = "text/html"))
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
