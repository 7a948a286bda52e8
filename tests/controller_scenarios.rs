//! End-to-end scenarios for the dashboard façade.
//!
//! Each test drives the public API against the in-memory daemon and checks
//! the status messages, the active screen and the snapshots together.

mod common;

use std::collections::HashMap;
use std::time::Duration;

use common::{running_container, stopped_container, TestDashboardBuilder};
use dockdeck::adapters::mock::{MockDaemon, MockOperation};
use dockdeck::app::{EmitOutcome, ViewMode};
use dockdeck::config::DashboardConfig;
use dockdeck::error::{DashboardError, GatewayError};
use dockdeck::models::{DaemonEvent, NetworkContainer, NetworkResource, ResourceKind};

fn net1() -> NetworkResource {
    NetworkResource {
        id: "net1".to_string(),
        name: "backend".to_string(),
        driver: "bridge".to_string(),
        scope: "local".to_string(),
        internal: true,
        containers: HashMap::from([(
            "c0ffee".to_string(),
            NetworkContainer {
                name: "api".to_string(),
                ipv4_address: "10.0.0.2/24".to_string(),
            },
        )]),
    }
}

/// Poll `check` until it holds or a second has passed.
async fn eventually(mut check: impl FnMut() -> bool) -> bool {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    check()
}

// ============================================================================
// Position resolution failures
// ============================================================================

#[tokio::test]
async fn test_image_position_out_of_range_reports_error_and_keeps_view() {
    let mut harness = TestDashboardBuilder::new().build().await;
    harness.dashboard.show_images();
    let before = harness.dashboard.view_mode();

    let err = harness
        .dashboard
        .image_at(99)
        .await
        .expect_err("position 99 is past the fixture");
    assert!(matches!(
        err,
        DashboardError::Resolution {
            kind: ResourceKind::Image,
            position: 99,
            ..
        }
    ));

    harness.dashboard.inspect_image_at(99).await;

    let messages = harness.drain();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Error"), "got {:?}", messages[0]);
    assert!(messages[0].contains("position 99"));
    assert_eq!(harness.dashboard.view_mode(), before);
    assert!(harness.dashboard.inspected_image().is_none());
}

#[tokio::test]
async fn test_failed_history_lookup_keeps_previous_snapshot() {
    let mut harness = TestDashboardBuilder::new().build().await;
    harness.dashboard.history_at(0).await;
    let layers = harness
        .dashboard
        .image_history()
        .expect("history of the first fixture image");
    harness.dashboard.show_images();
    harness.drain();

    harness.dashboard.history_at(42).await;

    let messages = harness.drain();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Error getting image history"));
    assert_eq!(harness.dashboard.view_mode(), ViewMode::Images);
    assert_eq!(harness.dashboard.image_history(), Some(layers));
}

// ============================================================================
// Fetch-then-show
// ============================================================================

#[tokio::test]
async fn test_inspect_network_by_id_stores_the_daemon_record() {
    let daemon = MockDaemon::new().with_networks(vec![net1()]);
    let mut harness = TestDashboardBuilder::new()
        .with_daemon(daemon)
        .build()
        .await;
    let refreshes = harness.refresher.count();

    harness.dashboard.inspect_network("net1").await;

    assert_eq!(harness.dashboard.view_mode(), ViewMode::InspectNetwork);
    let inspected = harness
        .dashboard
        .inspected_network()
        .expect("snapshot stored");
    assert_eq!(*inspected, net1());
    assert!(harness.drain().is_empty());
    assert_eq!(harness.refresher.count(), refreshes + 1);
}

#[tokio::test]
async fn test_inspect_unknown_network_reports_not_found() {
    let mut harness = TestDashboardBuilder::new().build().await;

    harness.dashboard.inspect_network("missing").await;

    assert_eq!(
        harness.drain(),
        vec!["Error inspecting network missing: no such network: missing"]
    );
    assert_eq!(harness.dashboard.view_mode(), ViewMode::Main);
    assert!(harness.dashboard.inspected_network().is_none());
}

#[tokio::test]
async fn test_show_info_failure_is_returned_to_the_caller() {
    let mut harness = TestDashboardBuilder::new()
        .with_failure(
            MockOperation::Info,
            GatewayError::Unavailable("connection refused".to_string()),
        )
        .build()
        .await;

    let err = harness.dashboard.show_info().await.unwrap_err();

    assert!(err.to_string().contains("connection refused"));
    assert!(harness.drain().is_empty());
    assert_eq!(harness.dashboard.view_mode(), ViewMode::Main);
    assert!(harness.dashboard.host_info().is_none());
}

// ============================================================================
// Prune report cache
// ============================================================================

#[tokio::test]
async fn test_prune_report_is_cached_after_prune() {
    let mut harness = TestDashboardBuilder::new().build().await;
    assert!(harness.dashboard.prune_report().is_none());

    harness.dashboard.prune().await;

    let report = harness.dashboard.prune_report().expect("report cached");
    assert_eq!(report.containers_deleted.len(), 2);
    assert_eq!(report.images_deleted.len(), 1);
    assert_eq!(report.networks_deleted.len(), 1);
    assert_eq!(report.space_reclaimed, 64_000_000);
    assert_eq!(
        harness.drain(),
        vec![
            "Pruning unused objects",
            "Pruned 4 objects, reclaimed 64.0 MB"
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_prune_report_expires_after_ttl() {
    let config = DashboardConfig::default()
        .with_outbox_capacity(8)
        .with_prune_report_ttl(Duration::from_secs(30));
    let harness = TestDashboardBuilder::new()
        .with_config(config)
        .build()
        .await;

    harness.dashboard.prune().await;
    tokio::time::advance(Duration::from_secs(29)).await;
    assert!(harness.dashboard.prune_report().is_some());

    tokio::time::advance(Duration::from_secs(2)).await;
    assert!(harness.dashboard.prune_report().is_none());
}

#[tokio::test]
async fn test_failed_prune_caches_nothing() {
    let mut harness = TestDashboardBuilder::new()
        .with_failure(
            MockOperation::Prune,
            GatewayError::Daemon("a prune operation is already running".to_string()),
        )
        .build()
        .await;

    harness.dashboard.prune().await;

    assert!(harness.dashboard.prune_report().is_none());
    assert_eq!(
        harness.drain(),
        vec![
            "Pruning unused objects",
            "Error running prune: a prune operation is already running"
        ]
    );
}

// ============================================================================
// Bulk removal
// ============================================================================

#[tokio::test]
async fn test_remove_all_stopped_containers_reports_count() {
    let daemon = MockDaemon::new().with_containers(vec![
        running_container("aaaaaaaaaaaa01", "web"),
        stopped_container("bbbbbbbbbbbb02", "job-1"),
        stopped_container("cccccccccccc03", "job-2"),
        stopped_container("dddddddddddd04", "job-3"),
    ]);
    let mut harness = TestDashboardBuilder::new()
        .with_daemon(daemon)
        .build()
        .await;

    harness.dashboard.remove_all_stopped_containers().await;

    assert_eq!(
        harness.drain(),
        vec![
            "Removing all stopped containers",
            "Removed 3 stopped containers"
        ]
    );
    assert_eq!(harness.daemon.container_count(), 1);
}

#[tokio::test]
async fn test_remove_all_stopped_containers_reports_failure_reason() {
    let mut harness = TestDashboardBuilder::new()
        .with_failure(
            MockOperation::RemoveAllStoppedContainers,
            GatewayError::Daemon("permission denied".to_string()),
        )
        .build()
        .await;

    harness.dashboard.remove_all_stopped_containers().await;

    let messages = harness.drain();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "Removing all stopped containers");
    assert!(messages[1].starts_with("Error removing all stopped containers"));
    assert!(messages[1].contains("permission denied"));
    assert_eq!(harness.daemon.container_count(), 4);
}

#[tokio::test]
async fn test_force_remove_image_in_use() {
    let mut harness = TestDashboardBuilder::new().build().await;

    harness.dashboard.remove_image_at(0, false).await;
    let refused = harness.drain();
    assert_eq!(refused.len(), 2);
    assert!(refused[1].starts_with("Error removing image 8dfafdbc3a40"));
    assert_eq!(harness.daemon.image_count(), 5);

    harness.dashboard.remove_image_at(0, true).await;
    assert_eq!(
        harness.drain(),
        vec![
            "Removing image: 8dfafdbc3a40",
            "Removed image: 8dfafdbc3a40"
        ]
    );
    assert_eq!(harness.daemon.image_count(), 4);
}

// ============================================================================
// Event pipeline and shutdown
// ============================================================================

#[tokio::test]
async fn test_daemon_events_refresh_and_are_logged() {
    let harness = TestDashboardBuilder::new().build().await;
    let before = harness.refresher.count();

    assert!(harness
        .daemon
        .inject_event(DaemonEvent::new("container", "start", "abc")));
    assert!(harness
        .daemon
        .inject_event(DaemonEvent::new("network", "connect", "net1")));
    harness.refresher.wait_for(before + 2).await;

    let recent = harness.dashboard.recent_events();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].action, "connect");
    assert_eq!(recent[1].action, "start");
}

#[tokio::test]
async fn test_close_cancels_subscription_exactly_once() {
    let harness = TestDashboardBuilder::new().build().await;
    assert_eq!(harness.daemon.subscription_count(), 1);

    harness.dashboard.close();
    harness.dashboard.close();
    harness.dashboard.close();

    assert!(harness.dashboard.is_closed());
    assert_eq!(harness.dashboard.join_event_pipeline().await, Some(0));
    assert!(eventually(|| harness.daemon.release_count() == 1).await);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(harness.daemon.release_count(), 1);
    assert!(!harness
        .daemon
        .inject_event(DaemonEvent::new("container", "die", "abc")));
}

#[tokio::test]
async fn test_emit_and_commands_after_close_do_not_panic() {
    let mut harness = TestDashboardBuilder::new().build().await;
    harness.dashboard.close();

    assert_eq!(harness.dashboard.emit("late"), EmitOutcome::Dropped);
    harness.dashboard.kill_at(0).await;
    harness.dashboard.prune().await;
    harness.dashboard.inspect_image_at(500).await;

    assert!(harness.drain().is_empty());
    assert_eq!(harness.outbox.recv().await, None);
}

#[tokio::test]
async fn test_drop_closes_the_dashboard() {
    let harness = TestDashboardBuilder::new().build().await;
    let daemon = harness.daemon.clone();

    drop(harness);

    assert!(eventually(|| daemon.release_count() == 1).await);
}
