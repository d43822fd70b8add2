//! Checkpoint façade delegates to the service and propagates its errors.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use hostprobe::application::services::HostCheckpoint;
use hostprobe::domain::Host;

use crate::mocks::InMemoryCheckpoints;

#[tokio::test]
async fn test_snapshot_then_restore_round_trips() {
    let checkpoint = HostCheckpoint::new(InMemoryCheckpoints::default());
    let host = Host::new("centos");

    checkpoint.snapshot(&host).await.expect("snapshot");
    checkpoint.restore(&host).await.expect("restore");
}

#[tokio::test]
async fn test_restore_without_snapshot_propagates_service_error() {
    let checkpoint = HostCheckpoint::new(InMemoryCheckpoints::default());

    let err = checkpoint.restore(&Host::new("centos")).await.unwrap_err();

    assert_eq!(err.to_string(), "no snapshot for centos");
}
