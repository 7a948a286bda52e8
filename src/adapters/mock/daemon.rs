//! In-memory container daemon.
//!
//! Keeps containers, images and networks in memory and applies mutations to
//! them, so sequences of dashboard commands observe consistent results.
//! Any operation can be made to fail, and events can be pushed into the
//! active subscription.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::sync::mpsc;

use super::fixture;
use crate::error::GatewayError;
use crate::lock;
use crate::models::{
    ContainerSummary, DaemonEvent, HostInfo, ImageDeleteResponse, ImageHistoryItem, ImageInspect,
    ImageSummary, NetworkResource, Node, PruneReport, ResourceKind, Service, SortMode, Task,
};
use crate::traits::{CancelHandle, DaemonGateway, EventSubscription, LogStream};

/// Capacity of the event channel handed out by [`MockDaemon::events`].
const EVENT_BUFFER: usize = 64;

/// Networks the daemon creates itself; prune never removes them.
const BUILTIN_NETWORKS: [&str; 3] = ["bridge", "host", "none"];

/// Identifies a gateway operation for failure injection and call counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    ContainerAt,
    ContainerById,
    ImageAt,
    ImageById,
    NetworkAt,
    NetworkById,
    Containers,
    Images,
    Networks,
    Nodes,
    Services,
    Tasks,
    InspectImage,
    InspectNetwork,
    History,
    Info,
    Service,
    Logs,
    Kill,
    Rm,
    Rmi,
    RemoveNetwork,
    RemoveAllStoppedContainers,
    RemoveDanglingImages,
    Prune,
    Events,
    Ok,
}

#[derive(Debug, Default)]
struct MockState {
    containers: Vec<ContainerSummary>,
    images: Vec<ImageSummary>,
    networks: Vec<NetworkResource>,
    history: HashMap<String, Vec<ImageHistoryItem>>,
    info: HostInfo,
    services: Vec<Service>,
    nodes: Vec<Node>,
    tasks: Vec<Task>,
    logs: HashMap<String, Vec<String>>,
    sort_mode: SortMode,
    sort_directives: Vec<SortMode>,
    failures: HashMap<MockOperation, GatewayError>,
    calls: HashMap<MockOperation, usize>,
}

impl MockState {
    fn sorted_networks(&self) -> Vec<NetworkResource> {
        let mut networks = self.networks.clone();
        match self.sort_mode {
            SortMode::Unsorted => {}
            SortMode::ById => networks.sort_by(|a, b| a.id.cmp(&b.id)),
            SortMode::ByName => networks.sort_by(|a, b| a.name.cmp(&b.name)),
            SortMode::ByDriver => {
                networks.sort_by(|a, b| a.driver.cmp(&b.driver).then_with(|| a.name.cmp(&b.name)))
            }
        }
        networks
    }
}

/// In-memory [`DaemonGateway`].
///
/// # Example
///
/// ```ignore
/// use dockdeck::adapters::mock::{MockDaemon, MockOperation};
/// use dockdeck::error::GatewayError;
///
/// let daemon = MockDaemon::with_fixture();
/// daemon.fail(MockOperation::Prune, GatewayError::Daemon("busy".into()));
/// assert!(daemon.prune().await.is_err());
/// ```
pub struct MockDaemon {
    state: Mutex<MockState>,
    events_tx: Arc<Mutex<Option<mpsc::Sender<DaemonEvent>>>>,
    subscriptions: AtomicUsize,
    releases: Arc<AtomicUsize>,
}

impl MockDaemon {
    /// An empty daemon.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
            events_tx: Arc::new(Mutex::new(None)),
            subscriptions: AtomicUsize::new(0),
            releases: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A daemon seeded with a small, realistic set of objects.
    pub fn with_fixture() -> Self {
        Self::new()
            .with_containers(fixture::containers())
            .with_images(fixture::images())
            .with_networks(fixture::networks())
            .with_history(fixture::history())
            .with_info(fixture::host_info())
            .with_services(fixture::services())
            .with_nodes(fixture::nodes())
            .with_tasks(fixture::tasks())
            .with_logs(fixture::logs())
    }

    pub fn with_containers(self, containers: Vec<ContainerSummary>) -> Self {
        lock::lock(&self.state).containers = containers;
        self
    }

    pub fn with_images(self, images: Vec<ImageSummary>) -> Self {
        lock::lock(&self.state).images = images;
        self
    }

    pub fn with_networks(self, networks: Vec<NetworkResource>) -> Self {
        lock::lock(&self.state).networks = networks;
        self
    }

    pub fn with_history(self, history: HashMap<String, Vec<ImageHistoryItem>>) -> Self {
        lock::lock(&self.state).history = history;
        self
    }

    pub fn with_info(self, info: HostInfo) -> Self {
        lock::lock(&self.state).info = info;
        self
    }

    pub fn with_services(self, services: Vec<Service>) -> Self {
        lock::lock(&self.state).services = services;
        self
    }

    pub fn with_nodes(self, nodes: Vec<Node>) -> Self {
        lock::lock(&self.state).nodes = nodes;
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        lock::lock(&self.state).tasks = tasks;
        self
    }

    pub fn with_logs(self, logs: HashMap<String, Vec<String>>) -> Self {
        lock::lock(&self.state).logs = logs;
        self
    }

    /// Make `operation` fail with `error` until [`clear_failure`](Self::clear_failure).
    pub fn fail(&self, operation: MockOperation, error: GatewayError) {
        lock::lock(&self.state).failures.insert(operation, error);
    }

    pub fn clear_failure(&self, operation: MockOperation) {
        lock::lock(&self.state).failures.remove(&operation);
    }

    /// How many times `operation` was invoked, failed calls included.
    pub fn call_count(&self, operation: MockOperation) -> usize {
        lock::lock(&self.state)
            .calls
            .get(&operation)
            .copied()
            .unwrap_or(0)
    }

    /// Every sort directive received, oldest first.
    pub fn sort_directives(&self) -> Vec<SortMode> {
        lock::lock(&self.state).sort_directives.clone()
    }

    pub fn container_count(&self) -> usize {
        lock::lock(&self.state).containers.len()
    }

    pub fn image_count(&self) -> usize {
        lock::lock(&self.state).images.len()
    }

    pub fn network_count(&self) -> usize {
        lock::lock(&self.state).networks.len()
    }

    /// Push an event into the active subscription.
    ///
    /// Returns false when nobody is subscribed or the buffer is full.
    pub fn inject_event(&self, event: DaemonEvent) -> bool {
        match lock::lock(&self.events_tx).as_ref() {
            Some(tx) => tx.try_send(event).is_ok(),
            None => false,
        }
    }

    /// How many subscriptions were opened.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    /// How many subscriptions were released by their cancel handle.
    pub fn release_count(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    /// Record the call and return the injected failure, if any.
    fn enter(&self, operation: MockOperation) -> Result<(), GatewayError> {
        let mut state = lock::lock(&self.state);
        *state.calls.entry(operation).or_insert(0) += 1;
        match state.failures.get(&operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn not_found(kind: ResourceKind, id: &str) -> GatewayError {
        GatewayError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    fn out_of_range(kind: ResourceKind, position: usize) -> GatewayError {
        GatewayError::PositionOutOfRange { kind, position }
    }

    fn log_stream(lines: Vec<String>) -> LogStream {
        stream::iter(lines.into_iter().map(Ok)).boxed()
    }
}

impl Default for MockDaemon {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DaemonGateway for MockDaemon {
    async fn container_at(&self, position: usize) -> Result<ContainerSummary, GatewayError> {
        self.enter(MockOperation::ContainerAt)?;
        lock::lock(&self.state)
            .containers
            .get(position)
            .cloned()
            .ok_or_else(|| Self::out_of_range(ResourceKind::Container, position))
    }

    async fn container_by_id(&self, id: &str) -> Result<ContainerSummary, GatewayError> {
        self.enter(MockOperation::ContainerById)?;
        lock::lock(&self.state)
            .containers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(ResourceKind::Container, id))
    }

    async fn image_at(&self, position: usize) -> Result<ImageSummary, GatewayError> {
        self.enter(MockOperation::ImageAt)?;
        lock::lock(&self.state)
            .images
            .get(position)
            .cloned()
            .ok_or_else(|| Self::out_of_range(ResourceKind::Image, position))
    }

    async fn image_by_id(&self, id: &str) -> Result<ImageSummary, GatewayError> {
        self.enter(MockOperation::ImageById)?;
        lock::lock(&self.state)
            .images
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(ResourceKind::Image, id))
    }

    async fn network_at(&self, position: usize) -> Result<NetworkResource, GatewayError> {
        self.enter(MockOperation::NetworkAt)?;
        lock::lock(&self.state)
            .sorted_networks()
            .into_iter()
            .nth(position)
            .ok_or_else(|| Self::out_of_range(ResourceKind::Network, position))
    }

    async fn network_by_id(&self, id: &str) -> Result<NetworkResource, GatewayError> {
        self.enter(MockOperation::NetworkById)?;
        lock::lock(&self.state)
            .networks
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(ResourceKind::Network, id))
    }

    async fn containers(&self) -> Result<Vec<ContainerSummary>, GatewayError> {
        self.enter(MockOperation::Containers)?;
        Ok(lock::lock(&self.state).containers.clone())
    }

    async fn images(&self) -> Result<Vec<ImageSummary>, GatewayError> {
        self.enter(MockOperation::Images)?;
        Ok(lock::lock(&self.state).images.clone())
    }

    async fn networks(&self) -> Result<Vec<NetworkResource>, GatewayError> {
        self.enter(MockOperation::Networks)?;
        Ok(lock::lock(&self.state).sorted_networks())
    }

    async fn nodes(&self) -> Result<Vec<Node>, GatewayError> {
        self.enter(MockOperation::Nodes)?;
        Ok(lock::lock(&self.state).nodes.clone())
    }

    async fn services(&self) -> Result<Vec<Service>, GatewayError> {
        self.enter(MockOperation::Services)?;
        Ok(lock::lock(&self.state).services.clone())
    }

    async fn tasks_for_service(&self, service_id: &str) -> Result<Vec<Task>, GatewayError> {
        self.enter(MockOperation::Tasks)?;
        let state = lock::lock(&self.state);
        if !state.services.iter().any(|s| s.id == service_id) {
            return Err(Self::not_found(ResourceKind::Service, service_id));
        }
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.service_id == service_id)
            .cloned()
            .collect())
    }

    async fn tasks_for_node(&self, node_id: &str) -> Result<Vec<Task>, GatewayError> {
        self.enter(MockOperation::Tasks)?;
        let state = lock::lock(&self.state);
        if !state.nodes.iter().any(|n| n.id == node_id) {
            return Err(Self::not_found(ResourceKind::Node, node_id));
        }
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.node_id == node_id)
            .cloned()
            .collect())
    }

    async fn inspect_image(&self, id: &str) -> Result<ImageInspect, GatewayError> {
        self.enter(MockOperation::InspectImage)?;
        let state = lock::lock(&self.state);
        let image = state
            .images
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| Self::not_found(ResourceKind::Image, id))?;
        Ok(ImageInspect {
            id: image.id.clone(),
            repo_tags: image.repo_tags.clone(),
            parent: String::new(),
            created: chrono::DateTime::<chrono::Utc>::from_timestamp(image.created, 0)
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            architecture: "amd64".to_string(),
            os: "linux".to_string(),
            size: image.size,
        })
    }

    async fn inspect_network(&self, id: &str) -> Result<NetworkResource, GatewayError> {
        self.enter(MockOperation::InspectNetwork)?;
        lock::lock(&self.state)
            .networks
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(ResourceKind::Network, id))
    }

    async fn history(&self, image_id: &str) -> Result<Vec<ImageHistoryItem>, GatewayError> {
        self.enter(MockOperation::History)?;
        let state = lock::lock(&self.state);
        if !state.images.iter().any(|i| i.id == image_id) {
            return Err(Self::not_found(ResourceKind::Image, image_id));
        }
        Ok(state.history.get(image_id).cloned().unwrap_or_default())
    }

    async fn info(&self) -> Result<HostInfo, GatewayError> {
        self.enter(MockOperation::Info)?;
        let state = lock::lock(&self.state);
        let mut info = state.info.clone();
        info.containers = state.containers.len() as u32;
        info.containers_running = state.containers.iter().filter(|c| c.is_running()).count() as u32;
        info.images = state.images.len() as u32;
        Ok(info)
    }

    async fn service(&self, id: &str) -> Result<Service, GatewayError> {
        self.enter(MockOperation::Service)?;
        lock::lock(&self.state)
            .services
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(ResourceKind::Service, id))
    }

    async fn logs(&self, container_id: &str) -> Result<LogStream, GatewayError> {
        self.enter(MockOperation::Logs)?;
        let state = lock::lock(&self.state);
        if !state.containers.iter().any(|c| c.id == container_id) {
            return Err(Self::not_found(ResourceKind::Container, container_id));
        }
        let lines = state.logs.get(container_id).cloned().unwrap_or_default();
        Ok(Self::log_stream(lines))
    }

    async fn service_logs(&self, service_id: &str) -> Result<LogStream, GatewayError> {
        self.enter(MockOperation::Logs)?;
        let state = lock::lock(&self.state);
        if !state.services.iter().any(|s| s.id == service_id) {
            return Err(Self::not_found(ResourceKind::Service, service_id));
        }
        let lines = state.logs.get(service_id).cloned().unwrap_or_default();
        Ok(Self::log_stream(lines))
    }

    fn sort_networks(&self, mode: SortMode) {
        let mut state = lock::lock(&self.state);
        state.sort_mode = mode;
        state.sort_directives.push(mode);
    }

    async fn kill(&self, container_id: &str) -> Result<(), GatewayError> {
        self.enter(MockOperation::Kill)?;
        let mut state = lock::lock(&self.state);
        let container = state
            .containers
            .iter_mut()
            .find(|c| c.id == container_id)
            .ok_or_else(|| Self::not_found(ResourceKind::Container, container_id))?;
        if !container.is_running() {
            return Err(GatewayError::Daemon(format!(
                "container {} is not running",
                container.name()
            )));
        }
        container.state = "exited".to_string();
        container.status = "Exited (137) Less than a second ago".to_string();
        Ok(())
    }

    async fn rm(&self, container_id: &str) -> Result<(), GatewayError> {
        self.enter(MockOperation::Rm)?;
        let mut state = lock::lock(&self.state);
        let index = state
            .containers
            .iter()
            .position(|c| c.id == container_id)
            .ok_or_else(|| Self::not_found(ResourceKind::Container, container_id))?;
        if state.containers[index].is_running() {
            return Err(GatewayError::Daemon(
                "cannot remove a running container, stop it first".to_string(),
            ));
        }
        state.containers.remove(index);
        Ok(())
    }

    async fn rmi(
        &self,
        image_id: &str,
        force: bool,
    ) -> Result<Vec<ImageDeleteResponse>, GatewayError> {
        self.enter(MockOperation::Rmi)?;
        let mut state = lock::lock(&self.state);
        let index = state
            .images
            .iter()
            .position(|i| i.id == image_id)
            .ok_or_else(|| Self::not_found(ResourceKind::Image, image_id))?;
        let in_use = state.containers.iter().any(|c| {
            state.images[index]
                .repo_tags
                .iter()
                .any(|tag| *tag == c.image)
        });
        if in_use && !force {
            return Err(GatewayError::Daemon(
                "image is being used by a container, use force to remove".to_string(),
            ));
        }
        let image = state.images.remove(index);
        let mut responses: Vec<ImageDeleteResponse> = image
            .repo_tags
            .into_iter()
            .map(|tag| ImageDeleteResponse {
                untagged: Some(tag),
                deleted: None,
            })
            .collect();
        responses.push(ImageDeleteResponse {
            untagged: None,
            deleted: Some(image.id),
        });
        Ok(responses)
    }

    async fn remove_network(&self, network_id: &str) -> Result<(), GatewayError> {
        self.enter(MockOperation::RemoveNetwork)?;
        let mut state = lock::lock(&self.state);
        let index = state
            .networks
            .iter()
            .position(|n| n.id == network_id)
            .ok_or_else(|| Self::not_found(ResourceKind::Network, network_id))?;
        if BUILTIN_NETWORKS.contains(&state.networks[index].name.as_str()) {
            return Err(GatewayError::Daemon(format!(
                "{} is a pre-defined network and cannot be removed",
                state.networks[index].name
            )));
        }
        state.networks.remove(index);
        Ok(())
    }

    async fn remove_all_stopped_containers(&self) -> Result<usize, GatewayError> {
        self.enter(MockOperation::RemoveAllStoppedContainers)?;
        let mut state = lock::lock(&self.state);
        let before = state.containers.len();
        state.containers.retain(|c| c.is_running());
        Ok(before - state.containers.len())
    }

    async fn remove_dangling_images(&self) -> Result<usize, GatewayError> {
        self.enter(MockOperation::RemoveDanglingImages)?;
        let mut state = lock::lock(&self.state);
        let before = state.images.len();
        state.images.retain(|i| !i.is_dangling());
        Ok(before - state.images.len())
    }

    async fn prune(&self) -> Result<PruneReport, GatewayError> {
        self.enter(MockOperation::Prune)?;
        let mut state = lock::lock(&self.state);
        let mut report = PruneReport::default();

        let (stopped, running): (Vec<_>, Vec<_>) =
            state.containers.drain(..).partition(|c| !c.is_running());
        report.containers_deleted = stopped.into_iter().map(|c| c.id).collect();
        state.containers = running;

        let (dangling, kept): (Vec<_>, Vec<_>) =
            state.images.drain(..).partition(|i| i.is_dangling());
        report.space_reclaimed = dangling.iter().map(|i| i.size.max(0) as u64).sum();
        report.images_deleted = dangling.into_iter().map(|i| i.id).collect();
        state.images = kept;

        let (unused, used): (Vec<_>, Vec<_>) = state.networks.drain(..).partition(|n| {
            n.containers.is_empty() && !BUILTIN_NETWORKS.contains(&n.name.as_str())
        });
        report.networks_deleted = unused.into_iter().map(|n| n.id).collect();
        state.networks = used;

        Ok(report)
    }

    async fn events(&self) -> Result<EventSubscription, GatewayError> {
        self.enter(MockOperation::Events)?;
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        let (cancel, mut token) = CancelHandle::new();
        *lock::lock(&self.events_tx) = Some(tx);
        self.subscriptions.fetch_add(1, Ordering::SeqCst);

        let events_tx = Arc::clone(&self.events_tx);
        let releases = Arc::clone(&self.releases);
        tokio::spawn(async move {
            token.cancelled().await;
            // Dropping the sender ends the subscriber's stream.
            lock::lock(&events_tx).take();
            releases.fetch_add(1, Ordering::SeqCst);
        });

        Ok(EventSubscription::new(rx, cancel))
    }

    async fn ok(&self) -> Result<bool, GatewayError> {
        self.enter(MockOperation::Ok)?;
        Ok(true)
    }
}
