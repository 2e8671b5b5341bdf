use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Activity;

/// The in-memory directory of all activities, keyed by name.
///
/// Cloning is cheap; every clone shares the same underlying map. The map is
/// insertion-ordered so `GET /activities` lists activities in seed order.
/// All check-then-mutate sequences must run under a single [`write`] guard;
/// the lock is what keeps capacity and duplicate checks race-free.
///
/// [`write`]: ActivityDirectory::write
#[derive(Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<IndexMap<String, Activity>>>,
}

impl ActivityDirectory {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Directory pre-loaded with the school's fixed activity catalog.
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Activity>> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Activity>> {
        self.inner.write().await
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The full set of activities is fixed at process start; nothing is created
/// or deleted through the API.
fn seed_catalog() -> IndexMap<String, Activity> {
    IndexMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Tennis Club".to_string(),
            activity(
                "Practice serves and rallies on the school courts",
                "Wednesdays, 4:00 PM - 5:30 PM",
                8,
                &[],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop argumentation and public speaking skills",
                "Thursdays, 4:00 PM - 5:30 PM",
                10,
                &[],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Rehearse and perform plays for the school community",
                "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
                20,
                &[],
            ),
        ),
        (
            "Science Club".to_string(),
            activity(
                "Hands-on experiments and science fair preparation",
                "Tuesdays, 3:30 PM - 5:00 PM",
                15,
                &[],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Painting, drawing and other visual arts",
                "Fridays, 3:30 PM - 5:00 PM",
                15,
                &[],
            ),
        ),
        (
            "Math Club".to_string(),
            activity(
                "Problem solving and math competition practice",
                "Tuesdays, 7:30 AM - 8:30 AM",
                10,
                &[],
            ),
        ),
    ])
}
