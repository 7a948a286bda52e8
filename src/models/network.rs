use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A network as listed or inspected by the daemon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkResource {
    #[serde(rename = "Id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub driver: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub internal: bool,
    /// Attached containers keyed by container id.
    #[serde(default)]
    pub containers: HashMap<String, NetworkContainer>,
}

/// A container endpoint attached to a network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkContainer {
    pub name: String,
    #[serde(default, rename = "IPv4Address")]
    pub ipv4_address: String,
}
