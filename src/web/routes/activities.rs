use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::models::{Catalog, MembershipResponse};
use crate::services::signup_service;
use crate::web::error::ApiError;
use crate::web::SharedStore;

pub async fn list_activities_handler(State(store): State<SharedStore>) -> Json<Catalog> {
    Json(signup_service::list_activities(&store))
}

#[derive(Debug, Deserialize, Default)]
pub struct SignupQuery {
    pub email: Option<String>,
}

pub async fn signup_handler(
    State(store): State<SharedStore>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MembershipResponse>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = query.email.ok_or(ApiError::MissingParameter("email"))?;
    let change = signup_service::signup(&store, &activity_name, &email)?;

    Ok(Json(MembershipResponse {
        message: format!("Signed up {} for {}", change.email, change.activity),
        change,
    }))
}

pub async fn remove_participant_handler(
    State(store): State<SharedStore>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<MembershipResponse>, ApiError> {
    let Path((activity_name, email)) = path?;
    let change = signup_service::remove_participant(&store, &activity_name, &email)?;

    Ok(Json(MembershipResponse {
        message: format!("Unregistered {} from {}", change.email, change.activity),
        change,
    }))
}
