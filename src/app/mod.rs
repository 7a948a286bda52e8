//! Application controller.
//!
//! [`Dashboard`] owns the view state, the detail-screen snapshots, the result
//! cache, the status-line outbox and the task that turns daemon events into
//! refreshes. It exposes one method per user action:
//! - pure transitions switch screens (`navigation`)
//! - fetch-then-show operations load a snapshot and switch to its screen
//!   (`inspect`)
//! - mutating actions report progress and outcome through the outbox
//!   (`actions`)
//!
//! Gateway failures inside those methods end up as outbox messages and leave
//! the active screen alone.

mod actions;
mod event_log;
mod inspect;
mod messages;
mod navigation;
pub mod outbox;
mod pipeline;
mod snapshots;
mod state;
mod view_mode;

pub use event_log::{EventLog, EVENT_LOG_CAPACITY};
pub use messages::format_bytes;
pub use outbox::{EmitOutcome, Outbox, OutboxReceiver};
pub use pipeline::EventPipeline;
pub use state::AppState;
pub use view_mode::ViewMode;

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::cache::ResultCache;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, DashboardResult};
use crate::lock;
use crate::models::{
    ContainerSummary, DaemonEvent, HostInfo, ImageHistoryItem, ImageInspect, ImageSummary,
    NetworkResource, Node, PruneReport, ResourceKind, Service, SortMode, Task,
};
use crate::traits::{CancelHandle, DaemonGateway, EventSubscription, LogStream, Refresh};
use snapshots::Snapshots;

/// Background resources released by [`Dashboard::close`].
#[derive(Debug, Default)]
struct Lifecycle {
    cancel: Option<CancelHandle>,
    pipeline: Option<EventPipeline>,
    janitor: Option<JoinHandle<()>>,
    closed: bool,
}

/// The dashboard controller.
///
/// Every method takes `&self`; share the dashboard behind an `Arc` to drive
/// it from several tasks.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use dockdeck::adapters::{ChannelRefresher, MockDaemon};
/// use dockdeck::app::Dashboard;
/// use dockdeck::config::DashboardConfig;
///
/// let (refresher, refresh_rx) = ChannelRefresher::new();
/// let dashboard = Dashboard::new(
///     Arc::new(MockDaemon::with_fixture()),
///     Arc::new(refresher),
///     DashboardConfig::default(),
/// )
/// .await?;
/// dashboard.inspect_image_at(0).await;
/// dashboard.close();
/// ```
pub struct Dashboard {
    daemon: Arc<dyn DaemonGateway>,
    refresher: Arc<dyn Refresh>,
    state: AppState,
    snapshots: Snapshots,
    cache: Arc<ResultCache>,
    outbox: Outbox,
    outbox_rx: Mutex<Option<OutboxReceiver>>,
    event_log: Arc<EventLog>,
    lifecycle: Mutex<Lifecycle>,
    config: DashboardConfig,
}

impl Dashboard {
    /// Subscribe to daemon events and start the background tasks.
    ///
    /// Fails only if the subscription cannot be opened.
    pub async fn new(
        daemon: Arc<dyn DaemonGateway>,
        refresher: Arc<dyn Refresh>,
        config: DashboardConfig,
    ) -> DashboardResult<Self> {
        let EventSubscription { events, cancel } = daemon.events().await?;
        daemon.sort_networks(config.initial_sort);

        let cache = Arc::new(ResultCache::new());
        let janitor = cache.spawn_janitor(config.cache_cleanup_interval);

        let event_log = Arc::new(EventLog::default());
        let pipeline = EventPipeline::spawn(
            events,
            cancel.token(),
            Arc::clone(&refresher),
            Arc::clone(&event_log),
        );

        let (outbox, outbox_rx) = outbox::channel(config.outbox_capacity);

        tracing::info!(
            "Dashboard started (sort: {}, outbox capacity: {})",
            config.initial_sort,
            config.outbox_capacity
        );

        Ok(Self {
            daemon,
            refresher,
            state: AppState::new(ViewMode::default(), config.initial_sort),
            snapshots: Snapshots::default(),
            cache,
            outbox,
            outbox_rx: Mutex::new(Some(outbox_rx)),
            event_log,
            lifecycle: Mutex::new(Lifecycle {
                cancel: Some(cancel),
                pipeline: Some(pipeline),
                janitor: Some(janitor),
                closed: false,
            }),
            config,
        })
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// The receiving end of the status-line outbox. Returns `None` after the
    /// first call.
    pub fn output_channel(&self) -> Option<OutboxReceiver> {
        lock::lock(&self.outbox_rx).take()
    }

    /// Cancel the event subscription, close the outbox and stop the cache
    /// janitor.
    ///
    /// Safe to call repeatedly; only the first call releases anything, so
    /// the subscription is cancelled exactly once.
    pub fn close(&self) {
        let mut lifecycle = lock::lock(&self.lifecycle);
        if lifecycle.closed {
            tracing::debug!("Dashboard already closed");
            return;
        }
        lifecycle.closed = true;

        if let Some(cancel) = lifecycle.cancel.take() {
            cancel.cancel();
        }
        if let Some(janitor) = lifecycle.janitor.take() {
            janitor.abort();
        }
        self.outbox.close();
        tracing::info!("Dashboard closed");
    }

    pub fn is_closed(&self) -> bool {
        lock::lock(&self.lifecycle).closed
    }

    /// Wait for the event pipeline to stop and return how many events it
    /// handled. `None` if it was already joined.
    pub async fn join_event_pipeline(&self) -> Option<usize> {
        let pipeline = lock::lock(&self.lifecycle).pipeline.take()?;
        Some(pipeline.join().await)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    // ========================================================================
    // Outbox and refresh
    // ========================================================================

    /// Offer a status message to the outbox consumer without blocking.
    pub fn emit(&self, message: impl Into<String>) -> EmitOutcome {
        self.outbox.emit(message)
    }

    fn refresh(&self) {
        self.refresher.refresh();
    }

    /// Log a failed command and report it on the status line.
    fn report_failure(&self, action: &str, err: DashboardError) {
        let transient = err.gateway_error().is_transient();
        tracing::warn!(transient, "Failed {}: {}", action, err);
        self.emit(err.user_message(action));
    }

    // ========================================================================
    // State and snapshot accessors
    // ========================================================================

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode()
    }

    pub fn previous_main_view_mode(&self) -> ViewMode {
        self.state.previous_main_view_mode()
    }

    pub fn sort_mode(&self) -> SortMode {
        self.state.sort_mode()
    }

    pub fn image_history(&self) -> Option<Arc<Vec<ImageHistoryItem>>> {
        self.snapshots.image_history.load()
    }

    pub fn inspected_image(&self) -> Option<Arc<ImageInspect>> {
        self.snapshots.inspected_image.load()
    }

    pub fn inspected_network(&self) -> Option<Arc<NetworkResource>> {
        self.snapshots.inspected_network.load()
    }

    /// The network list as last fetched by [`show_networks`](Self::show_networks).
    pub fn network_list(&self) -> Option<Arc<Vec<NetworkResource>>> {
        self.snapshots.networks.load()
    }

    pub fn host_info(&self) -> Option<Arc<HostInfo>> {
        self.snapshots.host_info.load()
    }

    pub fn service_tasks_target(&self) -> Option<Arc<String>> {
        self.snapshots.service_tasks_target.load()
    }

    pub fn node_tasks_target(&self) -> Option<Arc<String>> {
        self.snapshots.node_tasks_target.load()
    }

    /// The report of the last prune, while it is still cached.
    pub fn prune_report(&self) -> Option<Arc<PruneReport>> {
        self.cache.prune_report()
    }

    /// Recent daemon events, newest first.
    pub fn recent_events(&self) -> Vec<DaemonEvent> {
        self.event_log.recent()
    }

    // ========================================================================
    // Gateway call-throughs
    // ========================================================================

    pub async fn containers(&self) -> DashboardResult<Vec<ContainerSummary>> {
        Ok(self.daemon.containers().await?)
    }

    pub async fn images(&self) -> DashboardResult<Vec<ImageSummary>> {
        Ok(self.daemon.images().await?)
    }

    /// Networks in the current sort order, fetched live.
    pub async fn networks(&self) -> DashboardResult<Vec<NetworkResource>> {
        Ok(self.daemon.networks().await?)
    }

    pub async fn nodes(&self) -> DashboardResult<Vec<Node>> {
        Ok(self.daemon.nodes().await?)
    }

    pub async fn services(&self) -> DashboardResult<Vec<Service>> {
        Ok(self.daemon.services().await?)
    }

    pub async fn tasks_for_service(&self, service_id: &str) -> DashboardResult<Vec<Task>> {
        Ok(self.daemon.tasks_for_service(service_id).await?)
    }

    pub async fn tasks_for_node(&self, node_id: &str) -> DashboardResult<Vec<Task>> {
        Ok(self.daemon.tasks_for_node(node_id).await?)
    }

    pub async fn container_at(&self, position: usize) -> DashboardResult<ContainerSummary> {
        self.daemon
            .container_at(position)
            .await
            .map_err(|e| DashboardError::resolution(ResourceKind::Container, position, e))
    }

    pub async fn image_at(&self, position: usize) -> DashboardResult<ImageSummary> {
        self.daemon
            .image_at(position)
            .await
            .map_err(|e| DashboardError::resolution(ResourceKind::Image, position, e))
    }

    pub async fn network_at(&self, position: usize) -> DashboardResult<NetworkResource> {
        self.daemon
            .network_at(position)
            .await
            .map_err(|e| DashboardError::resolution(ResourceKind::Network, position, e))
    }

    pub async fn service_inspect(&self, service_id: &str) -> DashboardResult<Service> {
        Ok(self.daemon.service(service_id).await?)
    }

    pub async fn logs(&self, container_id: &str) -> DashboardResult<LogStream> {
        Ok(self.daemon.logs(container_id).await?)
    }

    pub async fn service_logs(&self, service_id: &str) -> DashboardResult<LogStream> {
        Ok(self.daemon.service_logs(service_id).await?)
    }

    /// Whether the daemon answers.
    pub async fn ok(&self) -> DashboardResult<bool> {
        Ok(self.daemon.ok().await?)
    }

    // ========================================================================
    // Position resolution
    // ========================================================================

    async fn resolve_container(&self, position: usize) -> DashboardResult<String> {
        self.container_at(position).await.map(|c| c.id)
    }

    async fn resolve_image(&self, position: usize) -> DashboardResult<String> {
        self.image_at(position).await.map(|i| i.id)
    }

    async fn resolve_network(&self, position: usize) -> DashboardResult<String> {
        self.network_at(position).await.map(|n| n.id)
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        self.close();
        // Nobody can join an unjoined pipeline any more.
        if let Some(pipeline) = lock::lock(&self.lifecycle).pipeline.take() {
            if !pipeline.is_finished() {
                pipeline.abort();
            }
        }
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("view_mode", &self.view_mode())
            .field("sort_mode", &self.sort_mode())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
