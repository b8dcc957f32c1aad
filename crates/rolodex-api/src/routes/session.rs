//! Login and logout.
//!
//! Neither route checks credentials. Each rewrites the session cookie; a
//! cookie issued before logout stays valid until it expires.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use http::header::SET_COOKIE;
use rolodex_auth::Session;

use crate::{AppState, Result};

pub(super) async fn login(
    State(state): State<AppState>,
    mut session: Session,
) -> Result<impl IntoResponse> {
    session.log_in_admin();
    let cookie = state.session_cookie(&session)?;
    tracing::info!("Admin logged in");
    Ok((
        [(SET_COOKIE, cookie)],
        Html(r#"User is now logged in. Goto <a href="/home">Home Page</a>"#),
    ))
}

pub(super) async fn logout(
    State(state): State<AppState>,
    mut session: Session,
) -> Result<impl IntoResponse> {
    session.log_out();
    let cookie = state.session_cookie(&session)?;
    tracing::info!("Logged out");
    Ok((
        [(SET_COOKIE, cookie)],
        Html(r#"User is logged out. Goto <a href="/home">Home Page</a>"#),
    ))
}
