//! Fetch-then-show operations.
//!
//! Each loads data from the daemon, stores it as the snapshot behind its
//! screen and switches to that screen. On failure the snapshot and the
//! active screen are left as they were and the failure goes to the outbox.
//! Position variants resolve the row to an id first and stop there if that
//! fails.

use super::{messages, Dashboard, ViewMode};
use crate::error::DashboardResult;

impl Dashboard {
    /// Show the layer history of the image at `position`.
    pub async fn history_at(&self, position: usize) {
        match self.resolve_image(position).await {
            Ok(id) => self.history(&id).await,
            Err(err) => self.report_failure("getting image history", err),
        }
    }

    /// Show the layer history of image `id`.
    pub async fn history(&self, id: &str) {
        match self.daemon.history(id).await {
            Ok(history) => {
                self.snapshots.image_history.store(history);
                self.change_view_mode(ViewMode::ImageHistory);
            }
            Err(err) => self.report_failure(&messages::history_action(id), err.into()),
        }
    }

    pub async fn inspect_image_at(&self, position: usize) {
        match self.resolve_image(position).await {
            Ok(id) => self.inspect_image(&id).await,
            Err(err) => self.report_failure("inspecting image", err),
        }
    }

    pub async fn inspect_image(&self, id: &str) {
        match self.daemon.inspect_image(id).await {
            Ok(image) => {
                self.snapshots.inspected_image.store(image);
                self.change_view_mode(ViewMode::InspectImage);
            }
            Err(err) => {
                self.report_failure(&messages::inspecting_image_action(id), err.into())
            }
        }
    }

    pub async fn inspect_network_at(&self, position: usize) {
        match self.resolve_network(position).await {
            Ok(id) => self.inspect_network(&id).await,
            Err(err) => self.report_failure("inspecting network", err),
        }
    }

    pub async fn inspect_network(&self, id: &str) {
        match self.daemon.inspect_network(id).await {
            Ok(network) => {
                self.snapshots.inspected_network.store(network);
                self.change_view_mode(ViewMode::InspectNetwork);
            }
            Err(err) => {
                self.report_failure(&messages::inspecting_network_action(id), err.into())
            }
        }
    }

    /// Fetch the network list in the current sort order and show it.
    pub async fn show_networks(&self) {
        match self.daemon.networks().await {
            Ok(networks) => {
                self.snapshots.networks.store(networks);
                self.change_view_mode(ViewMode::Networks);
            }
            Err(err) => self.report_failure("retrieving network list", err.into()),
        }
    }

    /// Fetch host information and show it.
    ///
    /// Unlike the other fetches, a failure is returned to the caller instead
    /// of being reported on the status line.
    pub async fn show_info(&self) -> DashboardResult<()> {
        let info = self.daemon.info().await?;
        self.snapshots.host_info.store(info);
        self.change_view_mode(ViewMode::Info);
        Ok(())
    }
}
