//! Public pages.

use axum::extract::State;
use axum::response::Html;
use http::StatusCode;

use crate::{AppState, Result, html};

pub(super) async fn index() -> Html<String> {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
    Html(format!(
        "<strong>Hello World!</strong>  The time is {now} <br /> Goto <a href='/home'>Home</a>"
    ))
}

pub(super) async fn home() -> Html<String> {
    Html(html::page("Home", "Sample homepage content"))
}

pub(super) async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let contacts = state.repo.list().await?;
    tracing::debug!(count = contacts.len(), "Listing contacts");
    Ok(Html(html::contact_list(&contacts)))
}

pub(super) async fn not_found() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html("<h1>Not Found</h1>\n<p>The requested URL was not found on the server.</p>"),
    )
}
