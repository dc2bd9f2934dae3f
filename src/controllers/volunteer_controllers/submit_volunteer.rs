use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use bson::oid::ObjectId;
use chrono::Utc;
use tracing::info;

use crate::controllers::volunteer_controllers::models::{VolunteerRequest, VolunteerResponse};
use crate::models::volunteer_models::VolunteerForm;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub async fn submit_volunteer_form(
    State(state): State<AppState>,
    payload: Result<Json<VolunteerRequest>, JsonRejection>,
) -> AppResult<Json<VolunteerResponse>> {
    let Json(body) = payload?;

    for (field, value) in [
        ("name", &body.name),
        ("email", &body.email),
        ("phone", &body.phone),
        ("state", &body.state),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError(format!("{} is required", field)));
        }
    }

    if !body.email.contains('@') {
        return Err(AppError::ValidationError("email is not valid".to_string()));
    }

    let form = VolunteerForm {
        id: ObjectId::new(),
        name: body.name.trim().to_string(),
        email: body.email.trim().to_string(),
        phone: body.phone.trim().to_string(),
        state: body.state.trim().to_string(),
        message: body.message,
        created_at: Utc::now(),
    };

    let id = state.submissions.insert_volunteer(&form).await?;

    info!(%id, state = %form.state, "volunteer form saved");

    Ok(Json(VolunteerResponse {
        success: true,
        message: "Thank you for volunteering!".to_string(),
        id: id.to_hex(),
    }))
}
