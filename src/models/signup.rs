use serde::{Deserialize, Serialize};

/// Result of a successful signup or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipChange {
    pub activity: String,
    pub email: String,
    pub participant_count: usize,
    pub participants: Vec<String>,
}

/// JSON body returned by the signup and removal endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub message: String,
    #[serde(flatten)]
    pub change: MembershipChange,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
