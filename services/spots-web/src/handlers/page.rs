//! The map page.

use axum::response::Html;

/// The page and its Leaflet driver script, bundled into the binary.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / - Map page
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
