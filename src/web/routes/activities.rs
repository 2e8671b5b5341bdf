use axum::extract::{Path, Query, State};
use axum::Json;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Activity;
use crate::services::signup_service;
use crate::store::ActivityDirectory;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct CommandMessage {
    pub message: String,
}

pub async fn activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<IndexMap<String, Activity>> {
    Json(signup_service::list_activities(&directory).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<CommandMessage>, ApiError> {
    match signup_service::signup(&directory, &activity_name, &query.email).await {
        Ok(message) => Ok(Json(CommandMessage { message })),
        Err(e) => {
            warn!(
                "Signup rejected for {} on {}: {}",
                query.email, activity_name, e
            );
            Err(e.into())
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<CommandMessage>, ApiError> {
    match signup_service::unregister(&directory, &activity_name, &query.email).await {
        Ok(message) => Ok(Json(CommandMessage { message })),
        Err(e) => {
            warn!(
                "Unregister rejected for {} on {}: {}",
                query.email, activity_name, e
            );
            Err(e.into())
        }
    }
}
