use serde::{Deserialize, Serialize};

// A live view session grouping participants under a generated id.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub name: String,
    pub id: String,
    pub creation_date_time: String,
}

// A named participant attached to exactly one live view session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    pub id: String,
    pub session_id: String,
    pub creation_date_time: String,
}
