use std::ops::Deref;

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};

use crate::database::catalog::{self, validate_catalog};
use crate::error::{ActivityError, ActivityResult, CatalogError};
use crate::models::{Activity, Catalog};

/// In-memory catalog with one lock per activity.
///
/// The outer map is only write-locked by [`ActivityStore::reset`]. Signups and
/// removals hold a read lock plus that activity's mutex for their whole
/// check-then-write sequence, so a reset waits for them to finish.
pub struct ActivityStore {
    activities: RwLock<IndexMap<String, Mutex<Activity>>>,
    baseline: Catalog,
}

impl ActivityStore {
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        validate_catalog(&catalog)?;
        Ok(Self::from_catalog(catalog))
    }

    pub fn with_default_catalog() -> Self {
        Self::from_catalog(catalog::default_catalog())
    }

    fn from_catalog(catalog: Catalog) -> Self {
        Self {
            activities: RwLock::new(build_entries(&catalog)),
            baseline: catalog,
        }
    }

    /// Snapshot of every activity, in catalog order.
    pub fn list_activities(&self) -> Catalog {
        self.activities
            .read()
            .iter()
            .map(|(name, entry)| (name.clone(), entry.lock().clone()))
            .collect()
    }

    pub fn get_activity(&self, name: &str) -> ActivityResult<Activity> {
        let activities = self.activities.read();
        let entry = activities.get(name).ok_or(ActivityError::NotFound)?;
        let activity = entry.lock().clone();
        Ok(activity)
    }

    /// Runs `f` with exclusive access to one activity.
    pub fn update<T, F>(&self, name: &str, f: F) -> ActivityResult<T>
    where
        F: FnOnce(&mut ActivityEntry<'_>) -> ActivityResult<T>,
    {
        let activities = self.activities.read();
        let entry = activities.get(name).ok_or(ActivityError::NotFound)?;
        let mut activity = entry.lock();
        let mut locked = ActivityEntry {
            activity: &mut *activity,
        };
        f(&mut locked)
    }

    /// Appends `email` to the activity; returns the new participant count.
    pub fn add_participant(&self, name: &str, email: &str) -> ActivityResult<usize> {
        self.update(name, |entry| entry.add_participant(email))
    }

    /// Removes `email` from the activity; returns the new participant count.
    pub fn remove_participant(&self, name: &str, email: &str) -> ActivityResult<usize> {
        self.update(name, |entry| {
            entry.remove_participant(email)?;
            Ok(entry.participant_count())
        })
    }

    /// Restores the catalog the store was built with. Blocks until every
    /// in-flight update has finished.
    pub fn reset(&self) {
        *self.activities.write() = build_entries(&self.baseline);
    }
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

fn build_entries(catalog: &Catalog) -> IndexMap<String, Mutex<Activity>> {
    catalog
        .iter()
        .map(|(name, activity)| (name.clone(), Mutex::new(activity.clone())))
        .collect()
}

/// Locked view of one activity. Mutations keep the capacity and
/// uniqueness invariants intact.
pub struct ActivityEntry<'a> {
    activity: &'a mut Activity,
}

impl ActivityEntry<'_> {
    pub fn add_participant(&mut self, email: &str) -> ActivityResult<usize> {
        if self.activity.has_participant(email) {
            return Err(ActivityError::AlreadyRegistered);
        }
        if self.activity.is_full() {
            return Err(ActivityError::ActivityFull);
        }
        self.activity.participants.push(email.to_string());
        Ok(self.activity.participants.len())
    }

    /// Removes the case-insensitive match and returns the stored spelling.
    pub fn remove_participant(&mut self, email: &str) -> ActivityResult<String> {
        let idx = self
            .activity
            .position_of(email)
            .ok_or(ActivityError::NotRegistered)?;
        Ok(self.activity.participants.remove(idx))
    }
}

impl Deref for ActivityEntry<'_> {
    type Target = Activity;

    fn deref(&self) -> &Activity {
        &*self.activity
    }
}
