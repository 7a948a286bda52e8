//! Common test utilities for integration tests.
//!
//! Builds a [`Dashboard`] over the in-memory daemon with a recording
//! refresher, so each test can drive the façade and inspect what the
//! daemon saw.
//!
//! # Example
//!
//! ```ignore
//! use common::TestDashboardBuilder;
//!
//! let harness = TestDashboardBuilder::new()
//!     .with_outbox_capacity(8)
//!     .build()
//!     .await;
//! harness.dashboard.prune().await;
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use dockdeck::adapters::mock::{MockDaemon, MockOperation};
use dockdeck::adapters::RecordingRefresher;
use dockdeck::app::{Dashboard, OutboxReceiver};
use dockdeck::config::DashboardConfig;
use dockdeck::error::GatewayError;
use dockdeck::models::ContainerSummary;

/// A dashboard plus the doubles behind it.
pub struct TestHarness {
    pub daemon: Arc<MockDaemon>,
    pub refresher: Arc<RecordingRefresher>,
    pub dashboard: Dashboard,
    pub outbox: OutboxReceiver,
}

impl TestHarness {
    /// Everything currently waiting in the outbox backlog, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        std::iter::from_fn(|| self.outbox.try_recv()).collect()
    }
}

/// Builder for [`TestHarness`].
pub struct TestDashboardBuilder {
    config: DashboardConfig,
    daemon: MockDaemon,
    failures: Vec<(MockOperation, GatewayError)>,
}

impl Default for TestDashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDashboardBuilder {
    /// Fixture daemon with a small outbox backlog so tests can drain it.
    pub fn new() -> Self {
        Self {
            config: DashboardConfig::default().with_outbox_capacity(8),
            daemon: MockDaemon::with_fixture(),
            failures: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_outbox_capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_outbox_capacity(capacity);
        self
    }

    pub fn with_daemon(mut self, daemon: MockDaemon) -> Self {
        self.daemon = daemon;
        self
    }

    /// Make `operation` fail from the start.
    pub fn with_failure(mut self, operation: MockOperation, error: GatewayError) -> Self {
        self.failures.push((operation, error));
        self
    }

    pub async fn build(self) -> TestHarness {
        for (operation, error) in self.failures {
            self.daemon.fail(operation, error);
        }
        let daemon = Arc::new(self.daemon);
        let refresher = Arc::new(RecordingRefresher::new());
        let dashboard = Dashboard::new(daemon.clone(), refresher.clone(), self.config)
            .await
            .expect("dashboard should start against the mock daemon");
        let outbox = dashboard
            .output_channel()
            .expect("output channel is taken only once");
        TestHarness {
            daemon,
            refresher,
            dashboard,
            outbox,
        }
    }
}

/// A stopped container with the given id and name.
pub fn stopped_container(id: &str, name: &str) -> ContainerSummary {
    ContainerSummary {
        id: id.to_string(),
        names: vec![format!("/{}", name)],
        image: "busybox:latest".to_string(),
        command: "true".to_string(),
        created: 1_700_000_000,
        state: "exited".to_string(),
        status: "Exited (0) 1 minute ago".to_string(),
    }
}

/// A running container with the given id and name.
pub fn running_container(id: &str, name: &str) -> ContainerSummary {
    ContainerSummary {
        state: "running".to_string(),
        status: "Up 5 minutes".to_string(),
        ..stopped_container(id, name)
    }
}
