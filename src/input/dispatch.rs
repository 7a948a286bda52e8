//! Command execution against the dashboard.

use std::ops::ControlFlow;

use super::{Command, Cursor};
use crate::app::{Dashboard, ViewMode};
use crate::error::DashboardResult;

/// Run `command` on `dashboard` for the row under `cursor`.
///
/// Returns `ControlFlow::Break` when the application should exit.
pub async fn dispatch(
    dashboard: &Dashboard,
    command: Command,
    cursor: &mut Cursor,
) -> ControlFlow<()> {
    let row = cursor.selected();
    let view = dashboard.view_mode();
    tracing::debug!("Dispatching {:?} on {:?} row {}", command, view, row);

    match command {
        Command::Quit => return ControlFlow::Break(()),
        Command::Back => dashboard.show_main_view(),

        Command::ShowContainers => dashboard.show_containers(),
        Command::ShowImages => dashboard.show_images(),
        Command::ShowNetworks => dashboard.show_networks().await,
        Command::ShowNodes => dashboard.show_nodes(),
        Command::ShowServices => dashboard.show_services(),
        Command::ShowMonitor => dashboard.show_monitor(),
        Command::ShowEvents => dashboard.show_events(),
        Command::ShowInfo => {
            if let Err(err) = dashboard.show_info().await {
                tracing::warn!("Host info unavailable: {}", err);
                dashboard.emit(err.user_message("retrieving host info"));
            }
        }
        Command::ShowDiskUsage => dashboard.show_disk_usage(),
        Command::ShowHelp => dashboard.show_help(),

        Command::MoveUp => cursor.up(),
        Command::MoveDown => cursor.down(),
        Command::OpenSelected => open_selected(dashboard, view, row).await,
        Command::History => dashboard.history_at(row).await,

        Command::Kill => dashboard.kill_at(row).await,
        Command::Remove => match view {
            ViewMode::Main => dashboard.rm_at(row).await,
            ViewMode::Images => dashboard.remove_image_at(row, false).await,
            ViewMode::Networks => dashboard.remove_network_at(row).await,
            _ => {}
        },
        Command::ForceRemove => dashboard.remove_image_at(row, true).await,
        Command::RemoveAllStopped => dashboard.remove_all_stopped_containers().await,
        Command::RemoveDangling => dashboard.remove_dangling_images().await,
        Command::Prune => dashboard.prune().await,
        Command::SortNetworks => dashboard.sort_networks(),
    }

    if command.changes_screen() && dashboard.view_mode() != view {
        cursor.reset();
    }
    ControlFlow::Continue(())
}

async fn open_selected(dashboard: &Dashboard, view: ViewMode, row: usize) {
    match view {
        ViewMode::Images => dashboard.inspect_image_at(row).await,
        ViewMode::Networks => dashboard.inspect_network_at(row).await,
        ViewMode::Services => {
            let services = dashboard.services().await;
            if let Some(id) = nth_id(dashboard, services, row, |s| s.id, "services") {
                dashboard.show_service_tasks(&id);
            }
        }
        ViewMode::Nodes => {
            let nodes = dashboard.nodes().await;
            if let Some(id) = nth_id(dashboard, nodes, row, |n| n.id, "nodes") {
                dashboard.show_node_tasks(&id);
            }
        }
        _ => {}
    }
}

/// The id of row `row` of a fetched list, reporting a failed fetch.
fn nth_id<T>(
    dashboard: &Dashboard,
    list: DashboardResult<Vec<T>>,
    row: usize,
    id: impl Fn(T) -> String,
    what: &str,
) -> Option<String> {
    match list {
        Ok(items) => items.into_iter().nth(row).map(id),
        Err(err) => {
            dashboard.emit(err.user_message(&format!("listing {}", what)));
            None
        }
    }
}
