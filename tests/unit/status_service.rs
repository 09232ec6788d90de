//! Unit tests for the status aggregation service.

#![allow(clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Arc;

use devstack::application::services::stack_status::{StatusReport, gather_status};

use crate::helpers::FakeProber;

fn names(report: &StatusReport) -> Vec<String> {
    match report {
        StatusReport::Services(statuses) => statuses.iter().map(|s| s.name.clone()).collect(),
        StatusReport::NoServices => Vec::new(),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn report_is_sorted_regardless_of_completion_order() {
    // The slowest probe belongs to the alphabetically-first service, so an
    // aggregator that kept arrival order would get this wrong.
    let prober = Arc::new(FakeProber {
        services: "web\ncache\napp".to_string(),
        latency_ms: HashMap::from([
            ("app".to_string(), 60),
            ("cache".to_string(), 25),
            ("web".to_string(), 1),
        ]),
        ..FakeProber::default()
    });

    let report = gather_status(prober).await.expect("gather");
    assert_eq!(names(&report), vec!["app", "cache", "web"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn report_order_ignores_enumeration_order() {
    let prober = Arc::new(FakeProber {
        services: "cache\napp".to_string(),
        ..FakeProber::default()
    });

    let report = gather_status(prober).await.expect("gather");
    assert_eq!(names(&report), vec!["app", "cache"]);
}

#[tokio::test]
async fn empty_enumeration_is_no_services() {
    let prober = Arc::new(FakeProber::default());
    let report = gather_status(prober).await.expect("gather");
    assert!(matches!(report, StatusReport::NoServices));
}

#[tokio::test]
async fn enumeration_error_is_no_services() {
    let prober = Arc::new(FakeProber {
        list_error: true,
        ..FakeProber::default()
    });
    let report = gather_status(prober.clone()).await.expect("gather");
    assert!(matches!(report, StatusReport::NoServices));
    // Soft failure stops before any probe.
    assert_eq!(prober.recorded_calls(), vec!["list"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn id_lookup_failure_aborts_whole_invocation() {
    let prober = Arc::new(FakeProber {
        services: "app\ndb\ncache".to_string(),
        fail_id_for: Some(("db".to_string(), "error resolving container".to_string())),
        ..FakeProber::default()
    });

    let err = gather_status(prober).await.expect_err("expected fatal error");
    // Reported verbatim, no wrapping.
    assert_eq!(err.to_string(), "error resolving container");
}

#[tokio::test]
async fn empty_container_id_still_fetches_status() {
    let prober = Arc::new(FakeProber {
        services: "app".to_string(),
        statuses: HashMap::from([(String::new(), "output".to_string())]),
        ..FakeProber::default()
    });

    let report = gather_status(prober.clone()).await.expect("gather");
    let StatusReport::Services(statuses) = report else {
        panic!("expected a populated report");
    };
    assert_eq!(statuses[0].state, "output");
    assert!(!statuses[0].running);
    assert!(
        prober.recorded_calls().contains(&"status ".to_string()),
        "status fetch should run even for an empty container ID"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn dead_probe_task_is_an_error_not_a_partial_report() {
    // The task for "db" dies without sending an outcome; the aggregator
    // must refuse to ship the rows it did collect.
    let prober = Arc::new(FakeProber {
        services: "app\ndb".to_string(),
        panic_id_for: Some("db".to_string()),
        ..FakeProber::default()
    });

    let err = gather_status(prober).await.expect_err("expected fatal error");
    assert!(err.to_string().contains("without reporting"));
}

#[tokio::test]
async fn status_fetch_failure_degrades_to_empty_state() {
    let prober = Arc::new(FakeProber {
        services: "app".to_string(),
        ids: HashMap::from([("app".to_string(), "100".to_string())]),
        status_error: true,
        ..FakeProber::default()
    });

    let report = gather_status(prober).await.expect("gather");
    let StatusReport::Services(statuses) = report else {
        panic!("expected a populated report");
    };
    assert_eq!(statuses[0].state, "");
    assert_eq!(statuses[0].ports, "");
    assert!(!statuses[0].running);
}

#[tokio::test]
async fn container_id_is_trimmed_before_status_fetch() {
    let prober = Arc::new(FakeProber {
        services: "app".to_string(),
        ids: HashMap::from([("app".to_string(), "100\n".to_string())]),
        statuses: HashMap::from([("100".to_string(), "Up 5 minutes|80/tcp".to_string())]),
        ..FakeProber::default()
    });

    let report = gather_status(prober).await.expect("gather");
    let StatusReport::Services(statuses) = report else {
        panic!("expected a populated report");
    };
    assert!(statuses[0].running);
    assert_eq!(statuses[0].ports, "80/tcp");
}
