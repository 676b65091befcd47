use std::path::Path;

use crate::error::CatalogError;
use crate::models::{Activity, Catalog};

const SCHOOL_DOMAIN: &str = "mergington.edu";

/// The fixed catalog the school starts every term with.
pub fn default_catalog() -> Catalog {
    let rows: [(&str, &str, &str, usize, [&str; 2]); 9] = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael", "daniel"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma", "sophia"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john", "olivia"],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Wednesdays, 4:00 PM - 5:30 PM",
            18,
            ["alex", "lucas"],
        ),
        (
            "Basketball Club",
            "Practice basketball skills and play friendly games",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["mia", "noah"],
        ),
        (
            "Art Workshop",
            "Explore painting, drawing, and sculpture techniques",
            "Mondays, 4:00 PM - 5:30 PM",
            16,
            ["ava", "liam"],
        ),
        (
            "Drama Club",
            "Act in plays and learn stage performance skills",
            "Tuesdays, 3:30 PM - 5:00 PM",
            20,
            ["ella", "jack"],
        ),
        (
            "Math Olympiad",
            "Prepare for math competitions and solve challenging problems",
            "Fridays, 4:00 PM - 5:30 PM",
            10,
            ["ethan", "isabella"],
        ),
        (
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Wednesdays, 3:30 PM - 5:00 PM",
            14,
            ["benjamin", "charlotte"],
        ),
    ];

    rows.into_iter()
        .map(|(name, description, schedule, max, students)| {
            let activity = Activity::new(description, schedule, max).with_participants(
                students
                    .iter()
                    .map(|s| format!("{}@{}", s, SCHOOL_DOMAIN)),
            );
            (name.to_string(), activity)
        })
        .collect()
}

/// Loads a JSON seed file shaped like the `GET /activities` response.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog = serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn to_json_pretty(catalog: &Catalog) -> serde_json::Result<String> {
    serde_json::to_string_pretty(catalog)
}

/// Checks the per-activity invariants. Name uniqueness is given by the map.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    for (name, activity) in catalog {
        if name.trim().is_empty() {
            return Err(CatalogError::BlankName);
        }
        if activity.max_participants == 0 {
            return Err(CatalogError::ZeroCapacity(name.clone()));
        }
        if activity.participants.len() > activity.max_participants {
            return Err(CatalogError::OverCapacity {
                name: name.clone(),
                count: activity.participants.len(),
                max: activity.max_participants,
            });
        }
        for (idx, email) in activity.participants.iter().enumerate() {
            if activity.participants[..idx]
                .iter()
                .any(|earlier| earlier.eq_ignore_ascii_case(email))
            {
                return Err(CatalogError::DuplicateParticipant {
                    name: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}
