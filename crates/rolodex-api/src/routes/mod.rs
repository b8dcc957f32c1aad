//! Route table.
//!
//! ```text
//! GET  /                           greeting + current time
//! GET  /home                       layout page
//! GET  /list                       contact display forms
//! GET  /login                      mark the session as admin
//! GET  /logout                     clear the session
//! *    /admin/...                  admin contact editor (gated)
//! ```

mod admin;
mod pages;
mod session;

use axum::Router;
use axum::routing::{get, post};
use rolodex_auth::{AdminGateLayer, SessionLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// The complete application service.
pub type App = NormalizePath<Router>;

/// Build the application router.
///
/// Layer order, outermost first: trailing-slash trimming, `TraceLayer`,
/// `SessionLayer`, and for the `/admin` subtree `AdminGateLayer`. Trimming
/// runs before routing, so `/admin/` reaches the gated admin index. The
/// admin subtree has its own fallback so unknown admin paths are gated too.
pub fn router(state: AppState) -> App {
    let admin = Router::new()
        .route("/", get(admin::index))
        .route("/contact", get(admin::list))
        .route("/contact/new", get(admin::create_form).post(admin::create))
        .route("/contact/{id}", get(admin::details))
        .route("/contact/{id}/edit", get(admin::edit_form).post(admin::update))
        .route("/contact/{id}/delete", post(admin::delete))
        .fallback(pages::not_found)
        .layer(AdminGateLayer::new());

    let app = Router::new()
        .route("/", get(pages::index))
        .route("/home", get(pages::home))
        .route("/list", get(pages::list))
        .route("/login", get(session::login))
        .route("/logout", get(session::logout))
        .nest("/admin", admin)
        .fallback(pages::not_found)
        .layer(SessionLayer::new(state.codec.clone(), state.cookie.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(app)
}
