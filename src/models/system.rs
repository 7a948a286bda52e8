use serde::{Deserialize, Serialize};

/// Daemon host information.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostInfo {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub server_version: String,
    #[serde(default)]
    pub operating_system: String,
    #[serde(default, rename = "NCPU")]
    pub ncpu: u32,
    #[serde(default)]
    pub mem_total: i64,
    #[serde(default)]
    pub containers: u32,
    #[serde(default)]
    pub containers_running: u32,
    #[serde(default)]
    pub images: u32,
}

/// What a prune run removed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PruneReport {
    #[serde(default)]
    pub containers_deleted: Vec<String>,
    #[serde(default)]
    pub images_deleted: Vec<String>,
    #[serde(default)]
    pub networks_deleted: Vec<String>,
    #[serde(default)]
    pub volumes_deleted: Vec<String>,
    /// Bytes reclaimed across all pruned objects.
    #[serde(default)]
    pub space_reclaimed: u64,
}

impl PruneReport {
    pub fn total_deleted(&self) -> usize {
        self.containers_deleted.len()
            + self.images_deleted.len()
            + self.networks_deleted.len()
            + self.volumes_deleted.len()
    }
}
