use indexmap::IndexMap;
use thiserror::Error;

use crate::models::Activity;
use crate::store::ActivityDirectory;

/// Why a signup or unregister command was rejected. All variants are client
/// errors; the HTTP mapping lives in `web::error`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Maximum participants exceeded")]
    CapacityExceeded,
    #[error("Student is not signed up for this activity")]
    NotRegistered,
}

/// Snapshot of the full activity catalog, in seed order.
pub async fn list_activities(directory: &ActivityDirectory) -> IndexMap<String, Activity> {
    directory.read().await.clone()
}

/// Register `email` for the named activity.
///
/// The existence, duplicate and capacity checks plus the append all happen
/// under one write guard, so two concurrent signups cannot push an activity
/// over capacity or register the same student twice.
pub async fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut activities = directory.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(SignupError::AlreadyRegistered);
    }
    if activity.is_full() {
        return Err(SignupError::CapacityExceeded);
    }

    activity.participants.push(email.to_string());
    Ok(format!("Signed up {email} for {activity_name}"))
}

/// Remove `email` from the named activity.
pub async fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    let mut activities = directory.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(SignupError::ActivityNotFound)?;

    let position = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(SignupError::NotRegistered)?;

    activity.participants.remove(position);
    Ok(format!("Unregistered {email} from {activity_name}"))
}
