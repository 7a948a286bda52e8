use serde::{Deserialize, Serialize};

/// A container as listed by the daemon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(default)]
    pub names: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub command: String,
    /// Creation time as a unix timestamp.
    #[serde(default)]
    pub created: i64,
    /// Machine-readable state, e.g. `running` or `exited`.
    #[serde(default)]
    pub state: String,
    /// Human-readable status, e.g. `Up 2 hours`.
    #[serde(default)]
    pub status: String,
}

impl ContainerSummary {
    /// First name without the leading slash the daemon adds.
    pub fn name(&self) -> &str {
        self.names
            .first()
            .map(|n| n.trim_start_matches('/'))
            .unwrap_or_default()
    }

    pub fn is_running(&self) -> bool {
        self.state == "running"
    }
}
