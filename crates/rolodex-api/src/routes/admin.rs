//! Admin contact editor.
//!
//! Every handler here sits behind `AdminGateLayer` and also takes an
//! [`AdminView`], so the caller's role is an explicit argument rather than
//! something read from ambient state.

use axum::Form;
use axum::extract::{FromRequestParts, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use http::request::Parts;
use rolodex_auth::context_from_parts;
use rolodex_core::{ContactId, NewContact};

use crate::{AppState, Error, Result, html};

const LIST_PATH: &str = "/admin/contact";
const NEW_PATH: &str = "/admin/contact/new";

/// Proof that the current request belongs to an admin session.
///
/// Built from the request's [`AuthContext`](rolodex_auth::AuthContext); extraction fails with
/// `403 Forbidden` for any other role.
pub(super) struct AdminView;

impl<S: Send + Sync> FromRequestParts<S> for AdminView {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let context = context_from_parts(parts);
        if !context.is_admin() {
            return Err(Error::Forbidden);
        }
        Ok(Self)
    }
}

/// A contact id taken from the path.
///
/// Wraps [`Path`] so a malformed id renders as an HTML `400` page.
pub(super) struct ContactPath(ContactId);

impl<S: Send + Sync> FromRequestParts<S> for ContactPath {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::BadRequest(e.body_text()))?;
        Ok(Self(ContactId(id)))
    }
}

pub(super) async fn index(_admin: AdminView) -> Html<String> {
    Html(html::admin_index())
}

pub(super) async fn list(_admin: AdminView, State(state): State<AppState>) -> Result<Html<String>> {
    let contacts = state.repo.list().await?;
    Ok(Html(html::admin_contact_table(&contacts)))
}

pub(super) async fn details(
    _admin: AdminView,
    State(state): State<AppState>,
    ContactPath(id): ContactPath,
) -> Result<Html<String>> {
    let contact = state.repo.get(id).await?;
    Ok(Html(html::admin_contact_details(&contact)))
}

pub(super) async fn create_form(_admin: AdminView) -> Html<String> {
    Html(html::admin_contact_form(
        "Create Contact",
        NEW_PATH,
        &NewContact::default(),
        None,
    ))
}

pub(super) async fn create(
    _admin: AdminView,
    State(state): State<AppState>,
    Form(form): Form<NewContact>,
) -> Result<Response> {
    match state.repo.create(form.clone()).await {
        Ok(contact) => {
            tracing::info!(id = %contact.id, uname = %contact.uname, "Created contact");
            Ok(Redirect::to(LIST_PATH).into_response())
        }
        Err(e) => rerender("Create Contact", NEW_PATH, &form, e.into()),
    }
}

pub(super) async fn edit_form(
    _admin: AdminView,
    State(state): State<AppState>,
    ContactPath(id): ContactPath,
) -> Result<Html<String>> {
    let contact = state.repo.get(id).await?;
    Ok(Html(html::admin_contact_form(
        "Edit Contact",
        &edit_path(contact.id),
        &contact.to_new_contact(),
        None,
    )))
}

pub(super) async fn update(
    _admin: AdminView,
    State(state): State<AppState>,
    ContactPath(id): ContactPath,
    Form(form): Form<NewContact>,
) -> Result<Response> {
    match state.repo.update(id, form.clone()).await {
        Ok(contact) => {
            tracing::info!(id = %contact.id, uname = %contact.uname, "Updated contact");
            Ok(Redirect::to(LIST_PATH).into_response())
        }
        Err(e) => rerender("Edit Contact", &edit_path(id), &form, e.into()),
    }
}

pub(super) async fn delete(
    _admin: AdminView,
    State(state): State<AppState>,
    ContactPath(id): ContactPath,
) -> Result<Redirect> {
    state.repo.delete(id).await?;
    tracing::info!(%id, "Deleted contact");
    Ok(Redirect::to(LIST_PATH))
}

fn edit_path(id: ContactId) -> String {
    format!("{LIST_PATH}/{id}/edit")
}

/// Show the submitted form again for 409 and 422 failures. Other errors
/// propagate unchanged.
fn rerender(title: &str, action: &str, values: &NewContact, err: Error) -> Result<Response> {
    let status = err.status_code();
    if status != http::StatusCode::CONFLICT && status != http::StatusCode::UNPROCESSABLE_ENTITY {
        return Err(err);
    }

    tracing::debug!(%status, "Rejected contact form: {err}");
    let message = form_message(&err);
    let page = html::admin_contact_form(title, action, values, Some(&message));
    Ok((status, Html(page)).into_response())
}

/// User-facing text for a rejected form.
fn form_message(err: &Error) -> String {
    match err {
        Error::Storage(rolodex_storage::Error::Core(rolodex_core::Error::Validation {
            message,
            ..
        }))
        | Error::Core(rolodex_core::Error::Validation { message, .. }) => message.clone(),
        Error::Storage(e) => e.to_string(),
        other => other.to_string(),
    }
}
