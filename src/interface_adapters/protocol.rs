use serde::{Deserialize, Serialize};

use crate::domain::entities::{Participant, Session};
use crate::domain::validation::{check_id, check_not_blank};

// Request payload for creating a new live view session.
#[derive(Debug, Deserialize)]
pub struct CreateSessionParams {
    #[serde(default)]
    pub name: String,
}

impl CreateSessionParams {
    // Collect every validation failure; an empty list means the
    // parameters are acceptable.
    pub fn check(&self) -> Vec<String> {
        check_not_blank("name", &self.name).into_iter().collect()
    }
}

// Result of a CreateSession operation.
#[derive(Debug, Default, Serialize)]
pub struct CreateSessionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// Parameters for locating an existing live view session.
#[derive(Debug)]
pub struct GetSessionParams {
    pub id: String,
}

impl GetSessionParams {
    pub fn check(&self) -> Vec<String> {
        check_id("id", &self.id).into_iter().collect()
    }
}

// Result of a GetSession operation.
#[derive(Debug, Default, Serialize)]
pub struct GetSessionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// Parameters for deleting an existing live view session.
#[derive(Debug)]
pub struct DeleteSessionParams {
    pub id: String,
}

impl DeleteSessionParams {
    pub fn check(&self) -> Vec<String> {
        check_id("id", &self.id).into_iter().collect()
    }
}

// Result of a DeleteSession operation.
#[derive(Debug, Default, Serialize)]
pub struct DeleteSessionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// Request payload for adding a participant to an existing session.
// The session id is taken from the request path and overrides any
// value present in the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddParticipantParams {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub name: String,
}

impl AddParticipantParams {
    pub fn check(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(check_id("sessionId", &self.session_id));
        errors.extend(check_not_blank("name", &self.name));
        errors
    }
}

// Result of an AddParticipant operation.
#[derive(Debug, Default, Serialize)]
pub struct AddParticipantResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// Parameters for locating a participant of a live view session.
#[derive(Debug)]
pub struct GetParticipantParams {
    pub session_id: String,
    pub participant_id: String,
}

impl GetParticipantParams {
    pub fn check(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(check_id("sessionId", &self.session_id));
        errors.extend(check_id("participantId", &self.participant_id));
        errors
    }
}

// Result of a GetParticipant operation.
#[derive(Debug, Default, Serialize)]
pub struct GetParticipantResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// Request payload for renaming a participant. Both ids are taken
// from the request path and override any values in the body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipantParams {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub participant_id: String,
    #[serde(default)]
    pub name: String,
}

impl UpdateParticipantParams {
    pub fn check(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(check_id("sessionId", &self.session_id));
        errors.extend(check_id("participantId", &self.participant_id));
        errors.extend(check_not_blank("name", &self.name));
        errors
    }
}

// Result of an UpdateParticipant operation.
#[derive(Debug, Default, Serialize)]
pub struct UpdateParticipantResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// Parameters for removing a participant from a live view session.
#[derive(Debug)]
pub struct DeleteParticipantParams {
    pub session_id: String,
    pub participant_id: String,
}

impl DeleteParticipantParams {
    pub fn check(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(check_id("sessionId", &self.session_id));
        errors.extend(check_id("participantId", &self.participant_id));
        errors
    }
}

// Result of a DeleteParticipant operation.
#[derive(Debug, Default, Serialize)]
pub struct DeleteParticipantResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

// Parameters for listing every participant of a session.
#[derive(Debug)]
pub struct GetParticipantsParams {
    pub session_id: String,
}

impl GetParticipantsParams {
    pub fn check(&self) -> Vec<String> {
        check_id("sessionId", &self.session_id).into_iter().collect()
    }
}

// Result of a GetParticipants operation.
#[derive(Debug, Default, Serialize)]
pub struct GetParticipantsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub participants: Vec<Participant>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
