pub mod activities;
pub mod signup;

pub use activities::Activity;
pub use signup::{ErrorBody, MembershipChange, MembershipResponse};

/// Ordered mapping of activity name to activity, in catalog order.
pub type Catalog = indexmap::IndexMap<String, Activity>;
