//! Mutating actions.
//!
//! Each action announces itself on the outbox, calls the daemon, then
//! reports either the outcome or the failure. Failures never leave the
//! method.

use std::sync::Arc;

use super::{messages, Dashboard};
use crate::cache::CachedValue;

impl Dashboard {
    pub async fn kill_at(&self, position: usize) {
        match self.resolve_container(position).await {
            Ok(id) => self.kill(&id).await,
            Err(err) => self.report_failure("killing container", err),
        }
    }

    pub async fn kill(&self, id: &str) {
        self.emit(messages::killing_container(id));
        match self.daemon.kill(id).await {
            Ok(()) => {
                self.emit(messages::killed_container(id));
                self.refresh();
            }
            Err(err) => self.report_failure(&messages::killing_container_action(id), err.into()),
        }
    }

    pub async fn rm_at(&self, position: usize) {
        match self.resolve_container(position).await {
            Ok(id) => self.rm(&id).await,
            Err(err) => self.report_failure("removing container", err),
        }
    }

    pub async fn rm(&self, id: &str) {
        self.emit(messages::removing_container(id));
        match self.daemon.rm(id).await {
            Ok(()) => {
                self.emit(messages::removed_container(id));
                self.refresh();
            }
            Err(err) => {
                self.report_failure(&messages::removing_container_action(id), err.into())
            }
        }
    }

    pub async fn remove_image_at(&self, position: usize, force: bool) {
        match self.resolve_image(position).await {
            Ok(id) => self.remove_image(&id, force).await,
            Err(err) => self.report_failure("removing image", err),
        }
    }

    /// Remove image `id`; `force` also removes an image in use.
    pub async fn remove_image(&self, id: &str, force: bool) {
        self.emit(messages::removing_image(id));
        match self.daemon.rmi(id, force).await {
            Ok(responses) => {
                tracing::debug!("Image {} removal: {} entries", id, responses.len());
                self.emit(messages::removed_image(id));
                self.refresh();
            }
            Err(err) => self.report_failure(&messages::removing_image_action(id), err.into()),
        }
    }

    pub async fn remove_network_at(&self, position: usize) {
        match self.resolve_network(position).await {
            Ok(id) => self.remove_network(&id).await,
            Err(err) => self.report_failure("removing network", err),
        }
    }

    pub async fn remove_network(&self, id: &str) {
        self.emit(messages::removing_network(id));
        match self.daemon.remove_network(id).await {
            Ok(()) => {
                self.emit(messages::removed_network(id));
                self.refresh();
            }
            Err(err) => {
                self.report_failure(&messages::removing_network_action(id), err.into())
            }
        }
    }

    pub async fn remove_all_stopped_containers(&self) {
        self.emit(messages::REMOVING_STOPPED_CONTAINERS);
        match self.daemon.remove_all_stopped_containers().await {
            Ok(count) => {
                self.emit(messages::removed_stopped_containers(count));
                self.refresh();
            }
            Err(err) => self.report_failure("removing all stopped containers", err.into()),
        }
    }

    pub async fn remove_dangling_images(&self) {
        self.emit(messages::REMOVING_DANGLING_IMAGES);
        match self.daemon.remove_dangling_images().await {
            Ok(count) => {
                self.emit(messages::removed_dangling_images(count));
                self.refresh();
            }
            Err(err) => self.report_failure("removing dangling images", err.into()),
        }
    }

    /// Remove unused objects and cache the report for the disk-usage screen.
    pub async fn prune(&self) {
        self.emit(messages::PRUNING);
        match self.daemon.prune().await {
            Ok(report) => {
                let summary = messages::pruned(&report);
                self.cache.put(
                    CachedValue::PruneReport(Arc::new(report)),
                    self.config.prune_report_ttl,
                );
                tracing::info!("{}", summary);
                self.emit(summary);
                self.refresh();
            }
            Err(err) => self.report_failure("running prune", err.into()),
        }
    }
}
