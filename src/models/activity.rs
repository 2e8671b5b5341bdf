use serde::{Deserialize, Serialize};

/// A single extracurricular offering. The activity name is not stored here;
/// it is the key in the directory map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Student emails in signup order, each at most once.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}
