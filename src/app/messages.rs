//! Status-line text for command outcomes.

use crate::models::{truncate_id, PruneReport};

pub(super) fn killing_container(id: &str) -> String {
    format!("Killing container with id {}", truncate_id(id))
}

pub(super) fn killed_container(id: &str) -> String {
    format!("Killed container with id {}", truncate_id(id))
}

pub(super) fn removing_container(id: &str) -> String {
    format!("Removing container with id {}", truncate_id(id))
}

pub(super) fn removed_container(id: &str) -> String {
    format!("Removed container with id {}", truncate_id(id))
}

pub(super) fn removing_image(id: &str) -> String {
    format!("Removing image: {}", truncate_id(id))
}

pub(super) fn removed_image(id: &str) -> String {
    format!("Removed image: {}", truncate_id(id))
}

pub(super) fn removing_network(id: &str) -> String {
    format!("Removing network: {}", truncate_id(id))
}

pub(super) fn removed_network(id: &str) -> String {
    format!("Removed network: {}", truncate_id(id))
}

pub(super) const REMOVING_STOPPED_CONTAINERS: &str = "Removing all stopped containers";

pub(super) fn removed_stopped_containers(count: usize) -> String {
    format!("Removed {} stopped containers", count)
}

pub(super) const REMOVING_DANGLING_IMAGES: &str = "Removing dangling images";

pub(super) fn removed_dangling_images(count: usize) -> String {
    format!("Removed {} dangling images", count)
}

pub(super) const PRUNING: &str = "Pruning unused objects";

pub(super) fn pruned(report: &PruneReport) -> String {
    format!(
        "Pruned {} objects, reclaimed {}",
        report.total_deleted(),
        format_bytes(report.space_reclaimed)
    )
}

// Actions named in failure messages; see `DashboardError::user_message`.

pub(super) fn killing_container_action(id: &str) -> String {
    format!("killing container {}", truncate_id(id))
}

pub(super) fn removing_container_action(id: &str) -> String {
    format!("removing container {}", truncate_id(id))
}

pub(super) fn removing_image_action(id: &str) -> String {
    format!("removing image {}", truncate_id(id))
}

pub(super) fn removing_network_action(id: &str) -> String {
    format!("removing network {}", truncate_id(id))
}

pub(super) fn inspecting_image_action(id: &str) -> String {
    format!("inspecting image {}", truncate_id(id))
}

pub(super) fn inspecting_network_action(id: &str) -> String {
    format!("inspecting network {}", truncate_id(id))
}

pub(super) fn history_action(id: &str) -> String {
    format!("getting history of image {}", truncate_id(id))
}

/// Format a byte count with decimal units, as the daemon's CLI does.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];
    if bytes < 1000 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_use_short_ids() {
        let id = "sha256:541a0f4efc6fa1b2c3d4e5f60718293a";
        assert_eq!(removing_image(id), "Removing image: 541a0f4efc6f");
        assert_eq!(
            killing_container_action("4c01db0b339c7e5c8a2b"),
            "killing container 4c01db0b339c"
        );
    }

    #[test]
    fn test_pruned_summarises_report() {
        let report = PruneReport {
            containers_deleted: vec!["a".to_string(), "b".to_string()],
            images_deleted: vec!["c".to_string()],
            space_reclaimed: 64_000_000,
            ..Default::default()
        };
        assert_eq!(pruned(&report), "Pruned 3 objects, reclaimed 64.0 MB");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(999), "999 B");
        assert_eq!(format_bytes(1_500), "1.5 kB");
        assert_eq!(format_bytes(187_000_000), "187.0 MB");
        assert_eq!(format_bytes(16_663_000_000), "16.7 GB");
    }
}
