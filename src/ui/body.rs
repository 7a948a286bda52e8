//! Body rows for each screen, gathered from the dashboard.

use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};

use super::theme::{COLOR_RUNNING, COLOR_STOPPED};
use crate::app::{format_bytes, Dashboard, ViewMode};
use crate::error::DashboardResult;
use crate::input::KeybindingConfig;
use crate::models::{truncate_id, ImageSummary, Task};

/// What the body of the active screen shows.
#[derive(Debug, Clone, Default)]
pub struct ViewBody {
    pub lines: Vec<Line<'static>>,
    /// Whether rows can be selected with the cursor.
    pub selectable: bool,
}

impl ViewBody {
    fn list(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            selectable: true,
        }
    }

    fn text(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            selectable: false,
        }
    }

    fn message(text: impl Into<String>) -> Self {
        Self::text(vec![Line::from(text.into()).italic()])
    }

    /// Rows the cursor can move over.
    pub fn rows(&self) -> usize {
        if self.selectable {
            self.lines.len()
        } else {
            0
        }
    }
}

/// Gather the body of the active screen.
///
/// List screens are fetched live; detail screens read their snapshot.
pub async fn collect(dashboard: &Dashboard) -> ViewBody {
    match dashboard.view_mode() {
        ViewMode::Main => or_message(dashboard.containers().await, |containers| {
            ViewBody::list(
                containers
                    .into_iter()
                    .map(|c| {
                        let color = if c.is_running() {
                            COLOR_RUNNING
                        } else {
                            COLOR_STOPPED
                        };
                        Line::from(vec![
                            Span::raw(format!("{:<14}", truncate_id(&c.id))),
                            Span::raw(format!("{:<18}", c.name())),
                            Span::raw(format!("{:<16}", c.image)),
                            Span::styled(c.status.clone(), Style::default().fg(color)),
                        ])
                    })
                    .collect(),
            )
        }),
        ViewMode::Images => or_message(dashboard.images().await, |images| {
            ViewBody::list(images.iter().map(image_line).collect())
        }),
        ViewMode::Networks => {
            let networks = match dashboard.networks().await {
                Ok(networks) => Some(networks),
                Err(err) => {
                    tracing::debug!("Live network list failed, using snapshot: {}", err);
                    dashboard.network_list().map(|n| n.as_ref().clone())
                }
            };
            match networks {
                Some(networks) => ViewBody::list(
                    networks
                        .iter()
                        .map(|n| {
                            Line::from(format!(
                                "{:<14}{:<16}{:<10}{:<8}{} containers",
                                truncate_id(&n.id),
                                n.name,
                                n.driver,
                                n.scope,
                                n.containers.len()
                            ))
                        })
                        .collect(),
                ),
                None => ViewBody::message("Network list unavailable"),
            }
        }
        ViewMode::InspectImage => match dashboard.inspected_image() {
            Some(image) => ViewBody::text(vec![
                field("Id", image.id.clone()),
                field("Tags", image.repo_tags.join(", ")),
                field("Parent", image.parent.clone()),
                field("Created", image.created.clone()),
                field("Platform", format!("{}/{}", image.os, image.architecture)),
                field("Size", format_bytes(image.size.max(0) as u64)),
            ]),
            None => ViewBody::message("No image inspected"),
        },
        ViewMode::InspectNetwork => match dashboard.inspected_network() {
            Some(network) => {
                let mut lines = vec![
                    field("Id", network.id.clone()),
                    field("Name", network.name.clone()),
                    field("Driver", network.driver.clone()),
                    field("Scope", network.scope.clone()),
                    field("Internal", network.internal.to_string()),
                    field("Containers", network.containers.len().to_string()),
                ];
                let mut attached: Vec<_> = network.containers.values().collect();
                attached.sort_by(|a, b| a.name.cmp(&b.name));
                lines.extend(
                    attached
                        .into_iter()
                        .map(|c| Line::from(format!("  {:<18}{}", c.name, c.ipv4_address))),
                );
                ViewBody::text(lines)
            }
            None => ViewBody::message("No network inspected"),
        },
        ViewMode::ImageHistory => match dashboard.image_history() {
            Some(history) if history.is_empty() => ViewBody::message("Image has no history"),
            Some(history) => ViewBody::text(
                history
                    .iter()
                    .map(|layer| {
                        Line::from(format!(
                            "{:<14}{:>10}  {}",
                            truncate_id(&layer.id),
                            format_bytes(layer.size.max(0) as u64),
                            layer.created_by
                        ))
                    })
                    .collect(),
            ),
            None => ViewBody::message("No image history loaded"),
        },
        ViewMode::DiskUsage => match dashboard.prune_report() {
            Some(report) => ViewBody::text(vec![
                field("Containers", report.containers_deleted.len().to_string()),
                field("Images", report.images_deleted.len().to_string()),
                field("Networks", report.networks_deleted.len().to_string()),
                field("Volumes", report.volumes_deleted.len().to_string()),
                field("Reclaimed", format_bytes(report.space_reclaimed)),
            ]),
            None => ViewBody::message("No recent prune. Press p to prune unused objects."),
        },
        ViewMode::Events => {
            let events = dashboard.recent_events();
            if events.is_empty() {
                return ViewBody::message("No events yet");
            }
            ViewBody::text(
                events
                    .into_iter()
                    .map(|e| {
                        Line::from(format!(
                            "{}  {:<10}{:<12}{}",
                            e.time.format("%H:%M:%S"),
                            e.kind,
                            e.action,
                            truncate_id(&e.actor_id)
                        ))
                    })
                    .collect(),
            )
        }
        ViewMode::Help => ViewBody::text(
            KeybindingConfig::help_lines()
                .into_iter()
                .map(|(keys, description)| field(keys, description.to_string()))
                .collect(),
        ),
        ViewMode::Info => match dashboard.host_info() {
            Some(info) => ViewBody::text(vec![
                field("Name", info.name.clone()),
                field("Server", info.server_version.clone()),
                field("OS", info.operating_system.clone()),
                field("CPUs", info.ncpu.to_string()),
                field("Memory", format_bytes(info.mem_total.max(0) as u64)),
                field(
                    "Containers",
                    format!("{} ({} running)", info.containers, info.containers_running),
                ),
                field("Images", info.images.to_string()),
            ]),
            None => ViewBody::message("No host information loaded"),
        },
        ViewMode::Monitor => or_message(dashboard.containers().await, |containers| {
            let running: Vec<Line<'static>> = containers
                .into_iter()
                .filter(|c| c.is_running())
                .map(|c| Line::from(format!("{:<18}{}", c.name(), c.status)).fg(COLOR_RUNNING))
                .collect();
            if running.is_empty() {
                ViewBody::message("No running containers")
            } else {
                ViewBody::text(running)
            }
        }),
        ViewMode::Nodes => or_message(dashboard.nodes().await, |nodes| {
            ViewBody::list(
                nodes
                    .into_iter()
                    .map(|n| {
                        Line::from(format!(
                            "{:<14}{:<16}{:<10}{}",
                            truncate_id(&n.id),
                            n.hostname,
                            n.role,
                            n.state
                        ))
                    })
                    .collect(),
            )
        }),
        ViewMode::Services => or_message(dashboard.services().await, |services| {
            ViewBody::list(
                services
                    .into_iter()
                    .map(|s| {
                        Line::from(format!(
                            "{:<14}{:<16}{:<16}{} replicas",
                            truncate_id(&s.id),
                            s.name,
                            s.image,
                            s.replicas
                        ))
                    })
                    .collect(),
            )
        }),
        ViewMode::ServiceTasks => match dashboard.service_tasks_target() {
            Some(id) => task_body(dashboard.tasks_for_service(&id).await),
            None => ViewBody::message("No service selected"),
        },
        ViewMode::Tasks => match dashboard.node_tasks_target() {
            Some(id) => task_body(dashboard.tasks_for_node(&id).await),
            None => ViewBody::message("No node selected"),
        },
    }
}

fn or_message<T>(result: DashboardResult<T>, body: impl FnOnce(T) -> ViewBody) -> ViewBody {
    match result {
        Ok(value) => body(value),
        Err(err) => ViewBody::message(err.to_string()),
    }
}

fn field(name: &str, value: String) -> Line<'static> {
    Line::from(vec![Span::raw(format!("{:<12}", name)).bold(), Span::raw(value)])
}

fn image_line(image: &ImageSummary) -> Line<'static> {
    let tags = if image.is_dangling() {
        "<none>".to_string()
    } else {
        image.repo_tags.join(", ")
    };
    let line = Line::from(format!(
        "{:<14}{:<28}{:>10}",
        truncate_id(&image.id),
        tags,
        format_bytes(image.size.max(0) as u64)
    ));
    if image.is_dangling() {
        line.fg(COLOR_STOPPED)
    } else {
        line
    }
}

fn task_body(tasks: DashboardResult<Vec<Task>>) -> ViewBody {
    or_message(tasks, |tasks| {
        if tasks.is_empty() {
            return ViewBody::message("No tasks");
        }
        ViewBody::text(
            tasks
                .into_iter()
                .map(|t| {
                    Line::from(format!(
                        "{:<10}{:<16}{:<16}{}",
                        t.id,
                        truncate_id(&t.service_id),
                        truncate_id(&t.node_id),
                        t.state
                    ))
                })
                .collect(),
        )
    })
}
