//! Item Editor Submission Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use allot_app::editor::EditorState;

use crate::{
    errors::ApiError,
    extensions::*,
    items::{
        errors::into_api_error,
        requests::{ItemForm, ItemResponse},
    },
};

/// Submission Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubmitResponse {
    /// Always `success`
    pub status: String,

    /// The stored item
    pub item: ItemResponse,
}

/// Item Editor Submission Handler
///
/// Accepts the editor's form fields. With `old_name` the named item is
/// replaced, otherwise a new item is added.
#[endpoint(
    tags("items"),
    summary = "Submit Item Editor Form",
    responses(
        (status_code = StatusCode::OK, description = "Item updated"),
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid form"),
        (status_code = StatusCode::NOT_FOUND, description = "Item being edited not found"),
        (status_code = StatusCode::CONFLICT, description = "An item with this name already exists"),
    ),
)]
#[tracing::instrument(
    name = "items.submit",
    skip(req, depot, res),
    fields(mode = tracing::field::Empty),
    err(Debug)
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubmitResponse>, ApiError> {
    let state = depot.app_state()?;

    let form = req
        .parse_form::<ItemForm>()
        .await
        .or_400("Invalid input data")?;

    let item = form
        .to_item()
        .map_err(|error| ApiError::bad_request(error.to_string()))?;

    let editor = EditorState::from_old_name(form.old_name.as_deref());

    let submission = editor.submission(item).or_400("Invalid submission")?;

    let created = submission.is_create();

    tracing::Span::current().record("mode", if created { "add" } else { "edit" });

    let stored = submission
        .apply(state.app.items.as_ref())
        .await
        .map_err(into_api_error)?;

    if created {
        res.status_code(StatusCode::CREATED);
    }

    Ok(Json(SubmitResponse {
        status: "success".to_string(),
        item: stored.into(),
    }))
}
