//! Screen-state and sort-rotation properties over many transition sequences.

mod common;

use common::TestDashboardBuilder;
use dockdeck::adapters::mock::MockOperation;
use dockdeck::app::{AppState, ViewMode};
use dockdeck::config::DashboardConfig;
use dockdeck::models::SortMode;

const ROTATION: [SortMode; 3] = [SortMode::ById, SortMode::ByName, SortMode::ByDriver];

/// Deterministic sequences of view modes, mixing main and detail screens.
fn sequences() -> Vec<Vec<ViewMode>> {
    let mut sequences = Vec::new();
    // Small linear congruential generator; reproducible without a dependency.
    let mut seed: u64 = 0x5eed;
    for len in 0..40 {
        let sequence = (0..len)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ViewMode::ALL[(seed >> 33) as usize % ViewMode::ALL.len()]
            })
            .collect();
        sequences.push(sequence);
    }
    sequences.push(ViewMode::ALL.to_vec());
    sequences.push(ViewMode::ALL.iter().rev().copied().collect());
    sequences
}

#[test]
fn test_last_set_wins_and_main_screen_is_remembered() {
    for sequence in sequences() {
        let state = AppState::new(ViewMode::default(), SortMode::ById);
        for mode in &sequence {
            state.set_view_mode(*mode);
        }

        let expected_current = sequence.last().copied().unwrap_or_default();
        let expected_main = sequence
            .iter()
            .rev()
            .find(|mode| mode.is_main_screen())
            .copied()
            .unwrap_or_default();

        assert_eq!(state.view_mode(), expected_current, "{:?}", sequence);
        assert_eq!(
            state.previous_main_view_mode(),
            expected_main,
            "{:?}",
            sequence
        );
    }
}

#[test]
fn test_restore_always_lands_on_a_main_screen() {
    for sequence in sequences() {
        let state = AppState::new(ViewMode::default(), SortMode::ById);
        for mode in &sequence {
            state.set_view_mode(*mode);
        }

        let restored = state.restore_main_view_mode();

        assert!(restored.is_main_screen(), "{:?}", sequence);
        assert_eq!(state.view_mode(), restored);
    }
}

#[test]
fn test_sort_rotation_has_period_three() {
    for start in ROTATION {
        let state = AppState::new(ViewMode::default(), start);
        let seen: Vec<SortMode> = (0..3).map(|_| state.rotate_sort_mode()).collect();

        assert_eq!(state.sort_mode(), start);
        for mode in ROTATION {
            assert!(seen.contains(&mode), "{:?} missing from {:?}", mode, seen);
        }
    }
}

#[tokio::test]
async fn test_show_main_view_after_detail_screens() {
    let harness = TestDashboardBuilder::new().build().await;

    harness.dashboard.show_networks().await;
    harness.dashboard.inspect_network_at(0).await;
    harness.dashboard.show_help();
    assert_eq!(harness.dashboard.view_mode(), ViewMode::Help);

    harness.dashboard.show_main_view();

    assert_eq!(harness.dashboard.view_mode(), ViewMode::Networks);
}

#[tokio::test]
async fn test_failed_network_list_keeps_the_current_screen() {
    let mut harness = TestDashboardBuilder::new()
        .with_failure(
            MockOperation::Networks,
            dockdeck::error::GatewayError::Unavailable("socket closed".to_string()),
        )
        .build()
        .await;
    harness.dashboard.show_images();

    harness.dashboard.show_networks().await;

    assert_eq!(harness.dashboard.view_mode(), ViewMode::Images);
    assert!(harness.dashboard.network_list().is_none());
    assert_eq!(
        harness.drain(),
        vec!["Error retrieving network list: daemon unavailable: socket closed"]
    );
}

#[tokio::test]
async fn test_sort_networks_drives_daemon_order() {
    let harness = TestDashboardBuilder::new()
        .with_config(
            DashboardConfig::default()
                .with_outbox_capacity(8)
                .with_initial_sort(SortMode::ById),
        )
        .build()
        .await;

    harness.dashboard.sort_networks();
    harness.dashboard.show_networks().await;
    let by_name: Vec<String> = harness
        .dashboard
        .network_list()
        .expect("network list")
        .iter()
        .map(|n| n.name.clone())
        .collect();
    assert_eq!(
        by_name,
        vec!["bridge", "frontend", "host", "none", "scratch"]
    );

    harness.dashboard.sort_networks();
    harness.dashboard.sort_networks();

    assert_eq!(harness.dashboard.sort_mode(), SortMode::ById);
    assert_eq!(
        harness.daemon.sort_directives(),
        vec![
            SortMode::ById,
            SortMode::ByName,
            SortMode::ByDriver,
            SortMode::ById
        ]
    );
}
