//! Seed data for [`MockDaemon::with_fixture`](super::MockDaemon::with_fixture).

use std::collections::HashMap;

use crate::models::{
    ContainerSummary, HostInfo, ImageHistoryItem, ImageSummary, NetworkContainer,
    NetworkResource, Node, Service, Task,
};

const NGINX_IMAGE_ID: &str =
    "sha256:8dfafdbc3a40f7a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f6071829";
const POSTGRES_IMAGE_ID: &str =
    "sha256:26380e1ca356a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f607182930";
const DANGLING_IMAGE_ID: &str =
    "sha256:541a0f4efc6fa1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f607182931";
const ALPINE_IMAGE_ID: &str =
    "sha256:a3d6e836e86aa1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f607182932";
const APP_IMAGE_ID: &str =
    "sha256:03b4557ad7b9a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f607182933";

const WEB_CONTAINER_ID: &str = "4c01db0b339c7e5c8a2b1f4d9e3a6b0c5d8e7f1a2b3c4d5e6f708192a3b4c5d6";

fn container(id: &str, name: &str, image: &str, running: bool) -> ContainerSummary {
    ContainerSummary {
        id: id.to_string(),
        names: vec![format!("/{}", name)],
        image: image.to_string(),
        command: String::new(),
        created: 1_700_000_000,
        state: if running { "running" } else { "exited" }.to_string(),
        status: if running {
            "Up 2 hours".to_string()
        } else {
            "Exited (0) 3 hours ago".to_string()
        },
    }
}

pub(super) fn containers() -> Vec<ContainerSummary> {
    vec![
        container(WEB_CONTAINER_ID, "web", "nginx:1.25", true),
        container(
            "9f8e7d6c5b4a39281706f5e4d3c2b1a09f8e7d6c5b4a39281706f5e4d3c2b1a0",
            "db",
            "postgres:16",
            true,
        ),
        container(
            "1a2b3c4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f708192a3b4c5d6e7f809",
            "migrate",
            "app:latest",
            false,
        ),
        container(
            "0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0",
            "nightly-report",
            "alpine:3.19",
            false,
        ),
    ]
}

fn image(id: &str, tags: &[&str], size: i64) -> ImageSummary {
    ImageSummary {
        id: id.to_string(),
        repo_tags: tags.iter().map(|t| t.to_string()).collect(),
        created: 1_699_000_000,
        size,
    }
}

pub(super) fn images() -> Vec<ImageSummary> {
    vec![
        image(NGINX_IMAGE_ID, &["nginx:1.25"], 187_000_000),
        image(POSTGRES_IMAGE_ID, &["postgres:16"], 432_000_000),
        image(DANGLING_IMAGE_ID, &[], 64_000_000),
        image(ALPINE_IMAGE_ID, &["alpine:3.19"], 7_400_000),
        image(APP_IMAGE_ID, &["app:latest"], 121_000_000),
    ]
}

fn network(id: &str, name: &str, driver: &str) -> NetworkResource {
    NetworkResource {
        id: id.to_string(),
        name: name.to_string(),
        driver: driver.to_string(),
        scope: "local".to_string(),
        internal: false,
        containers: HashMap::new(),
    }
}

pub(super) fn networks() -> Vec<NetworkResource> {
    let mut frontend = network("d41f2b8c9e07", "frontend", "bridge");
    frontend.containers.insert(
        WEB_CONTAINER_ID.to_string(),
        NetworkContainer {
            name: "web".to_string(),
            ipv4_address: "172.18.0.2/16".to_string(),
        },
    );
    vec![
        network("f3a9c1e5b7d2", "bridge", "bridge"),
        network("7b2e4d6f8a1c", "host", "host"),
        network("2c8e0a4b6d9f", "none", "null"),
        frontend,
        network("a6c2e8b4d0f1", "scratch", "overlay"),
    ]
}

pub(super) fn history() -> HashMap<String, Vec<ImageHistoryItem>> {
    let layers = vec![
        ImageHistoryItem {
            id: NGINX_IMAGE_ID.to_string(),
            created: 1_699_000_000,
            created_by: "/bin/sh -c #(nop)  CMD [\"nginx\" \"-g\" \"daemon off;\"]".to_string(),
            size: 0,
            comment: String::new(),
        },
        ImageHistoryItem {
            id: "<missing>".to_string(),
            created: 1_698_990_000,
            created_by: "/bin/sh -c apt-get update && apt-get install -y nginx".to_string(),
            size: 112_000_000,
            comment: String::new(),
        },
        ImageHistoryItem {
            id: "<missing>".to_string(),
            created: 1_698_980_000,
            created_by: "/bin/sh -c #(nop) ADD file:rootfs.tar.xz in /".to_string(),
            size: 75_000_000,
            comment: String::new(),
        },
    ];
    HashMap::from([(NGINX_IMAGE_ID.to_string(), layers)])
}

pub(super) fn host_info() -> HostInfo {
    HostInfo {
        id: "Q3ZK:7H2L:PX4M".to_string(),
        name: "devbox".to_string(),
        server_version: "25.0.3".to_string(),
        operating_system: "Debian GNU/Linux 12 (bookworm)".to_string(),
        ncpu: 8,
        mem_total: 16_663_000_000,
        containers: 0,
        containers_running: 0,
        images: 0,
    }
}

pub(super) fn services() -> Vec<Service> {
    vec![
        Service {
            id: "svc1q2w3e4r5t".to_string(),
            name: "api".to_string(),
            image: "app:latest".to_string(),
            replicas: 2,
        },
        Service {
            id: "svc6y7u8i9o0p".to_string(),
            name: "worker".to_string(),
            image: "app:latest".to_string(),
            replicas: 1,
        },
    ]
}

pub(super) fn nodes() -> Vec<Node> {
    vec![
        Node {
            id: "node1a2b3c4d".to_string(),
            hostname: "manager-1".to_string(),
            role: "manager".to_string(),
            state: "ready".to_string(),
        },
        Node {
            id: "node5e6f7g8h".to_string(),
            hostname: "worker-1".to_string(),
            role: "worker".to_string(),
            state: "ready".to_string(),
        },
    ]
}

pub(super) fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task01".to_string(),
            service_id: "svc1q2w3e4r5t".to_string(),
            node_id: "node1a2b3c4d".to_string(),
            state: "running".to_string(),
        },
        Task {
            id: "task02".to_string(),
            service_id: "svc1q2w3e4r5t".to_string(),
            node_id: "node5e6f7g8h".to_string(),
            state: "running".to_string(),
        },
        Task {
            id: "task03".to_string(),
            service_id: "svc6y7u8i9o0p".to_string(),
            node_id: "node5e6f7g8h".to_string(),
            state: "running".to_string(),
        },
    ]
}

pub(super) fn logs() -> HashMap<String, Vec<String>> {
    HashMap::from([
        (
            WEB_CONTAINER_ID.to_string(),
            vec![
                "172.18.0.1 - - \"GET / HTTP/1.1\" 200 615".to_string(),
                "172.18.0.1 - - \"GET /favicon.ico HTTP/1.1\" 404 153".to_string(),
            ],
        ),
        (
            "svc1q2w3e4r5t".to_string(),
            vec!["api listening on :8080".to_string()],
        ),
    ])
}
