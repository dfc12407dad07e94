/// Landing page
use axum::response::Html;

pub const GREETING: &str = "<h1>hello world this is a music APP</h1>";

/// GET / - Static greeting
pub async fn home() -> Html<&'static str> {
    Html(GREETING)
}
