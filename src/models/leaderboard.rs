use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub total_steps: u64,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, total_steps: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            total_steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub participant_id: String,
    pub name: String,
    pub total_steps: u64,
    pub rank: u32,
}

impl From<&LeaderboardEntry> for Participant {
    fn from(entry: &LeaderboardEntry) -> Self {
        Participant::new(entry.participant_id.clone(), entry.name.clone(), entry.total_steps)
    }
}
