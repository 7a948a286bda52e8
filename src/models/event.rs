use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the daemon's event stream.
///
/// The dashboard does not interpret events beyond their arrival; the fields
/// are kept for the events log screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaemonEvent {
    /// Object category, e.g. `container` or `network`.
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Action")]
    pub action: String,
    /// Id of the object the event is about.
    #[serde(rename = "ActorID")]
    pub actor_id: String,
    #[serde(rename = "Time")]
    pub time: DateTime<Utc>,
}

impl DaemonEvent {
    pub fn new(
        kind: impl Into<String>,
        action: impl Into<String>,
        actor_id: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            action: action.into(),
            actor_id: actor_id.into(),
            time: Utc::now(),
        }
    }
}
