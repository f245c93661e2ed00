/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Per-call timing metrics.
//!
//! Every call owns exactly one [`MetricsScope`]. Middleware finds a [`RequestMetrics`] handle in the
//! request property bag and records the duration of its own stage. When the scope is dropped, on
//! success, on error, or because the caller dropped the future, the total execution time is
//! recorded and the report is published.

use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Wall time of the whole call, from marshalling to the parsed result
    ClientExecuteTime,
    /// Time spent turning the typed input into an HTTP request
    RequestMarshallTime,
    /// Time spent waiting on the credentials provider
    CredentialsRequestTime,
    /// Time spent in the transport, until response headers are available
    HttpRequestTime,
    /// Time spent reading the body and unmarshalling the result or the error
    ResponseProcessingTime,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::ClientExecuteTime => "ClientExecuteTime",
            Metric::RequestMarshallTime => "RequestMarshallTime",
            Metric::CredentialsRequestTime => "CredentialsRequestTime",
            Metric::HttpRequestTime => "HttpRequestTime",
            Metric::ResponseProcessingTime => "ResponseProcessingTime",
        }
    }
}

/// Durations recorded for one call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timings {
    entries: BTreeMap<Metric, Duration>,
}

impl Timings {
    pub fn get(&self, metric: Metric) -> Option<Duration> {
        self.entries.get(&metric).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, Duration)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

/// A finished call's metrics
#[derive(Clone, Debug)]
pub struct MetricsReport {
    pub service: &'static str,
    pub operation: &'static str,
    pub timings: Timings,
}

/// Receiver of per-call metrics
///
/// Implementations must not block: `publish` runs inside `Drop`.
pub trait PublishMetrics: Send + Sync + Debug {
    fn publish(&self, report: &MetricsReport);
}

/// Handle to the metrics of one in-flight call
///
/// Cloning the handle does not create a new context; all clones record into the same call.
#[derive(Clone, Debug, Default)]
pub struct RequestMetrics {
    timings: Arc<Mutex<Timings>>,
}

impl RequestMetrics {
    fn new() -> Self {
        Self::default()
    }

    /// Add `duration` to `metric`.
    pub fn record(&self, metric: Metric, duration: Duration) {
        let mut timings = self
            .timings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *timings.entries.entry(metric).or_default() += duration;
    }

    /// Run `f`, recording how long it took as `metric`.
    pub fn time<T>(&self, metric: Metric, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(metric, start.elapsed());
        result
    }

    /// A snapshot of what has been recorded so far
    pub fn timings(&self) -> Timings {
        self.timings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Owner of a call's metrics context
///
/// Dropping the scope ends the call: `ClientExecuteTime` is recorded, the report is logged at
/// `DEBUG` and handed to the publisher, if any.
pub struct MetricsScope {
    metrics: RequestMetrics,
    started: Instant,
    service: &'static str,
    operation: &'static str,
    publisher: Option<Arc<dyn PublishMetrics>>,
}

impl Debug for MetricsScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsScope")
            .field("service", &self.service)
            .field("operation", &self.operation)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl MetricsScope {
    pub fn start(
        service: &'static str,
        operation: &'static str,
        publisher: Option<Arc<dyn PublishMetrics>>,
    ) -> Self {
        MetricsScope {
            metrics: RequestMetrics::new(),
            started: Instant::now(),
            service,
            operation,
            publisher,
        }
    }

    pub fn metrics(&self) -> &RequestMetrics {
        &self.metrics
    }
}

impl Drop for MetricsScope {
    fn drop(&mut self) {
        self.metrics
            .record(Metric::ClientExecuteTime, self.started.elapsed());
        let report = MetricsReport {
            service: self.service,
            operation: self.operation,
            timings: self.metrics.timings(),
        };
        tracing::debug!(
            service = report.service,
            operation = report.operation,
            timings = ?report.timings,
            "call finished"
        );
        if let Some(publisher) = &self.publisher {
            publisher.publish(&report);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::metrics::{Metric, MetricsReport, MetricsScope, PublishMetrics};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing_test::traced_test;

    #[derive(Debug, Default)]
    struct Collect(Mutex<Vec<MetricsReport>>);

    impl PublishMetrics for Collect {
        fn publish(&self, report: &MetricsReport) {
            self.0.lock().unwrap().push(report.clone());
        }
    }

    #[test]
    fn scope_publishes_on_drop() {
        let publisher = Arc::new(Collect::default());
        {
            let scope = MetricsScope::start("glue", "GetTable", Some(publisher.clone()));
            let handle = scope.metrics().clone();
            handle.record(Metric::HttpRequestTime, Duration::from_millis(5));
            handle.record(Metric::HttpRequestTime, Duration::from_millis(5));
            assert!(publisher.0.lock().unwrap().is_empty());
        }
        let reports = publisher.0.lock().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].operation, "GetTable");
        assert_eq!(
            reports[0].timings.get(Metric::HttpRequestTime),
            Some(Duration::from_millis(10))
        );
        assert!(reports[0].timings.get(Metric::ClientExecuteTime).is_some());
        assert!(reports[0].timings.get(Metric::CredentialsRequestTime).is_none());
    }

    #[test]
    fn time_records_closure_duration() {
        let scope = MetricsScope::start("efs", "CreateFileSystem", None);
        let value = scope.metrics().time(Metric::RequestMarshallTime, || 42);
        assert_eq!(value, 42);
        assert!(scope
            .metrics()
            .timings()
            .get(Metric::RequestMarshallTime)
            .is_some());
    }

    #[test]
    #[traced_test]
    fn scope_without_publisher_still_logs() {
        drop(MetricsScope::start("codebuild", "StartBuild", None));
        assert!(logs_contain("call finished"));
        assert!(logs_contain("StartBuild"));
    }
}
