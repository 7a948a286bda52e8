//! Container daemon gateway trait.
//!
//! Abstracts every call the dashboard makes against the daemon so the
//! controller can be exercised against an in-memory implementation.

use async_trait::async_trait;
use futures::stream::BoxStream;

use super::events::EventSubscription;
use crate::error::GatewayError;
use crate::models::{
    ContainerSummary, HostInfo, ImageDeleteResponse, ImageHistoryItem, ImageInspect,
    ImageSummary, NetworkResource, Node, PruneReport, Service, SortMode, Task,
};

/// Lines of a container or service log, in arrival order.
pub type LogStream = BoxStream<'static, Result<String, GatewayError>>;

/// Operations offered by the container daemon.
///
/// "Position" arguments are rows of the list as currently sorted and shown
/// by the gateway, starting at zero.
///
/// # Example
///
/// ```ignore
/// use dockdeck::traits::DaemonGateway;
///
/// async fn first_image_id<D: DaemonGateway>(daemon: &D) -> Option<String> {
///     daemon.image_at(0).await.ok().map(|image| image.id)
/// }
/// ```
#[async_trait]
pub trait DaemonGateway: Send + Sync {
    // Lookups by visible row or id

    async fn container_at(&self, position: usize) -> Result<ContainerSummary, GatewayError>;

    async fn container_by_id(&self, id: &str) -> Result<ContainerSummary, GatewayError>;

    async fn image_at(&self, position: usize) -> Result<ImageSummary, GatewayError>;

    async fn image_by_id(&self, id: &str) -> Result<ImageSummary, GatewayError>;

    async fn network_at(&self, position: usize) -> Result<NetworkResource, GatewayError>;

    async fn network_by_id(&self, id: &str) -> Result<NetworkResource, GatewayError>;

    // Listings

    async fn containers(&self) -> Result<Vec<ContainerSummary>, GatewayError>;

    async fn images(&self) -> Result<Vec<ImageSummary>, GatewayError>;

    /// Networks ordered by the last sort directive.
    async fn networks(&self) -> Result<Vec<NetworkResource>, GatewayError>;

    async fn nodes(&self) -> Result<Vec<Node>, GatewayError>;

    async fn services(&self) -> Result<Vec<Service>, GatewayError>;

    async fn tasks_for_service(&self, service_id: &str) -> Result<Vec<Task>, GatewayError>;

    async fn tasks_for_node(&self, node_id: &str) -> Result<Vec<Task>, GatewayError>;

    // Inspection

    async fn inspect_image(&self, id: &str) -> Result<ImageInspect, GatewayError>;

    async fn inspect_network(&self, id: &str) -> Result<NetworkResource, GatewayError>;

    async fn history(&self, image_id: &str) -> Result<Vec<ImageHistoryItem>, GatewayError>;

    async fn info(&self) -> Result<HostInfo, GatewayError>;

    async fn service(&self, id: &str) -> Result<Service, GatewayError>;

    async fn logs(&self, container_id: &str) -> Result<LogStream, GatewayError>;

    async fn service_logs(&self, service_id: &str) -> Result<LogStream, GatewayError>;

    /// Change the order in which networks are listed and resolved by position.
    fn sort_networks(&self, mode: SortMode);

    // Mutations

    async fn kill(&self, container_id: &str) -> Result<(), GatewayError>;

    async fn rm(&self, container_id: &str) -> Result<(), GatewayError>;

    async fn rmi(
        &self,
        image_id: &str,
        force: bool,
    ) -> Result<Vec<ImageDeleteResponse>, GatewayError>;

    async fn remove_network(&self, network_id: &str) -> Result<(), GatewayError>;

    /// Returns how many containers were removed.
    async fn remove_all_stopped_containers(&self) -> Result<usize, GatewayError>;

    /// Returns how many images were removed.
    async fn remove_dangling_images(&self) -> Result<usize, GatewayError>;

    async fn prune(&self) -> Result<PruneReport, GatewayError>;

    // Lifecycle

    /// Subscribe to the daemon's event stream.
    ///
    /// The stream ends once the returned cancel handle is cancelled.
    async fn events(&self) -> Result<EventSubscription, GatewayError>;

    /// Whether the daemon answers.
    async fn ok(&self) -> Result<bool, GatewayError>;
}
