//! Pure screen transitions and sort rotation.

use super::{Dashboard, ViewMode};

impl Dashboard {
    /// Activate `mode` without refreshing.
    pub fn set_view_mode(&self, mode: ViewMode) {
        tracing::debug!("View mode -> {:?}", mode);
        self.state.set_view_mode(mode);
    }

    /// Activate `mode` and redraw.
    pub(super) fn change_view_mode(&self, mode: ViewMode) {
        self.set_view_mode(mode);
        self.refresh();
    }

    /// Return to the last main screen.
    pub fn show_main_view(&self) {
        let mode = self.state.restore_main_view_mode();
        tracing::debug!("View mode -> {:?} (back)", mode);
        self.refresh();
    }

    pub fn show_containers(&self) {
        self.change_view_mode(ViewMode::Main);
    }

    pub fn show_images(&self) {
        self.change_view_mode(ViewMode::Images);
    }

    pub fn show_help(&self) {
        self.change_view_mode(ViewMode::Help);
    }

    /// Show the disk-usage screen, which reads the cached prune report.
    pub fn show_disk_usage(&self) {
        self.change_view_mode(ViewMode::DiskUsage);
    }

    pub fn show_events(&self) {
        self.change_view_mode(ViewMode::Events);
    }

    pub fn show_monitor(&self) {
        self.change_view_mode(ViewMode::Monitor);
    }

    pub fn show_nodes(&self) {
        self.change_view_mode(ViewMode::Nodes);
    }

    pub fn show_services(&self) {
        self.change_view_mode(ViewMode::Services);
    }

    /// List the tasks of `service_id`.
    pub fn show_service_tasks(&self, service_id: &str) {
        self.snapshots
            .service_tasks_target
            .store(service_id.to_string());
        self.change_view_mode(ViewMode::ServiceTasks);
    }

    /// List the tasks running on `node_id`.
    pub fn show_node_tasks(&self, node_id: &str) {
        self.snapshots.node_tasks_target.store(node_id.to_string());
        self.change_view_mode(ViewMode::Tasks);
    }

    /// Advance the network sort mode, push it to the daemon and redraw.
    pub fn sort_networks(&self) {
        let mode = self.state.rotate_sort_mode();
        tracing::debug!("Network sort -> {}", mode);
        self.daemon.sort_networks(mode);
        self.refresh();
    }
}
