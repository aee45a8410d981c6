//! Participant DTOs

use serde::{Deserialize, Serialize};

use domain_split::Participant;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddParticipantRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ParticipantsResponse {
    pub participants: Vec<String>,
}

impl From<&[Participant]> for ParticipantsResponse {
    fn from(participants: &[Participant]) -> Self {
        Self {
            participants: participants.iter().map(|p| p.name().to_string()).collect(),
        }
    }
}
