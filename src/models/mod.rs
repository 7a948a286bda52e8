//! Records returned by the container daemon.
//!
//! Field names follow the Engine API's JSON shape (`PascalCase`) so the
//! records can be deserialized straight from daemon responses.

mod container;
mod event;
mod image;
mod network;
mod sort;
mod swarm;
mod system;

pub use container::ContainerSummary;
pub use event::DaemonEvent;
pub use image::{ImageDeleteResponse, ImageHistoryItem, ImageInspect, ImageSummary};
pub use network::{NetworkContainer, NetworkResource};
pub use sort::SortMode;
pub use swarm::{Node, Service, Task};
pub use system::{HostInfo, PruneReport};

use std::fmt;

/// Length of the short form of an object id.
pub const SHORT_ID_LEN: usize = 12;

/// Kind of daemon object an id or position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Container,
    Image,
    Network,
    Service,
    Node,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Container => "container",
            ResourceKind::Image => "image",
            ResourceKind::Network => "network",
            ResourceKind::Service => "service",
            ResourceKind::Node => "node",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorten an object id for display.
///
/// Strips a `sha256:` digest prefix and keeps the first 12 characters.
pub fn truncate_id(id: &str) -> &str {
    let id = id.strip_prefix("sha256:").unwrap_or(id);
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
