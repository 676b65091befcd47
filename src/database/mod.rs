pub mod activities_repo;
pub mod catalog;

pub use activities_repo::{ActivityEntry, ActivityStore};
