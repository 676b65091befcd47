use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::{ActivityError, ActivityResult};
use crate::models::{Catalog, MembershipChange};
use crate::services::email_validation::normalize_email;

pub fn list_activities(store: &ActivityStore) -> Catalog {
    store.list_activities()
}

/// Registers `email` for `activity_name`.
///
/// Checks run in this order under the activity lock: unknown activity,
/// malformed email, already registered (ignoring case), activity full.
/// A rejected call leaves the participant list untouched.
pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> ActivityResult<MembershipChange> {
    let result = store.update(activity_name, |entry| {
        let email = normalize_email(email)?;
        let participant_count = entry.add_participant(&email)?;
        Ok(MembershipChange {
            activity: activity_name.to_string(),
            email,
            participant_count,
            participants: entry.participants.clone(),
        })
    });

    match &result {
        Ok(change) => info!(
            activity = %change.activity,
            email = %change.email,
            participants = change.participant_count,
            "participant signed up"
        ),
        Err(e) => log_rejection("signup", activity_name, email, e),
    }
    result
}

/// Unregisters `email` from `activity_name`. The reported email is the
/// spelling stored at signup.
pub fn remove_participant(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> ActivityResult<MembershipChange> {
    let result = store.update(activity_name, |entry| {
        let removed = entry.remove_participant(email.trim())?;
        Ok(MembershipChange {
            activity: activity_name.to_string(),
            email: removed,
            participant_count: entry.participant_count(),
            participants: entry.participants.clone(),
        })
    });

    match &result {
        Ok(change) => info!(
            activity = %change.activity,
            email = %change.email,
            participants = change.participant_count,
            "participant removed"
        ),
        Err(e) => log_rejection("remove", activity_name, email, e),
    }
    result
}

fn log_rejection(action: &str, activity: &str, email: &str, err: &ActivityError) {
    warn!(action, activity, email, reason = %err, "membership change rejected");
}
