//! Common types and data structures

use serde::Deserialize;

/// Activity details as served by `GET /activities`, keyed by name on the wire
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A named activity with its roster
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_details(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Remaining capacity. Negative if the server over-filled the activity.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// Identifies a participant's removal control on the board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantKey {
    pub activity: String,
    pub email: String,
}

impl ParticipantKey {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }
}

/// Body of a 2xx mutation response
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: String,
}

/// Body of a rejected mutation response
#[derive(Debug, Deserialize)]
pub struct DetailBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Result of a sign-up or unregister request that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Accepted { message: String },
    Rejected { status: u16, detail: Option<String> },
}
