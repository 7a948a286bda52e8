//! Last fetched data behind the detail screens.

use std::sync::{Arc, RwLock};

use crate::lock;
use crate::models::{HostInfo, ImageHistoryItem, ImageInspect, NetworkResource};

/// Holds the latest value of one snapshot. A store replaces the value
/// wholesale; readers keep whatever `Arc` they loaded.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    value: RwLock<Option<Arc<T>>>,
}

impl<T> Slot<T> {
    pub(crate) fn store(&self, value: T) {
        *lock::write(&self.value) = Some(Arc::new(value));
    }

    pub(crate) fn load(&self) -> Option<Arc<T>> {
        lock::read(&self.value).clone()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Snapshots {
    pub(crate) image_history: Slot<Vec<ImageHistoryItem>>,
    pub(crate) inspected_image: Slot<ImageInspect>,
    pub(crate) inspected_network: Slot<NetworkResource>,
    pub(crate) networks: Slot<Vec<NetworkResource>>,
    pub(crate) host_info: Slot<HostInfo>,
    /// Service whose tasks are listed.
    pub(crate) service_tasks_target: Slot<String>,
    /// Node whose tasks are listed.
    pub(crate) node_tasks_target: Slot<String>,
}
