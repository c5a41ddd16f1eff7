//! Metrics collection for observability

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec_with_registry, register_counter_with_registry,
    register_gauge_with_registry, register_histogram_with_registry, Counter, CounterVec, Gauge,
    Histogram, Opts, Registry,
};
use std::sync::Arc;

/// Global metrics registry
pub static METRICS: Lazy<Arc<Metrics>> =
    Lazy::new(|| Arc::new(Metrics::new().expect("Failed to initialize metrics")));

/// Metrics collector
pub struct Metrics {
    registry: Registry,

    /// Ask requests by outcome (matches, syllabus, no_result, rejected)
    pub ask_requests: CounterVec,
    pub ask_duration: Histogram,
    pub dataset_records: Gauge,
    pub dataset_sources_skipped: Counter,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let registry = Registry::new();

        let ask_requests = register_counter_vec_with_registry!(
            Opts::new("ask_requests_total", "Total ask requests by outcome"),
            &["outcome"],
            registry
        )?;

        let ask_duration = register_histogram_with_registry!(
            "ask_request_duration_seconds",
            "Ask request duration in seconds",
            registry
        )?;

        let dataset_records = register_gauge_with_registry!(
            Opts::new("dataset_records", "Records loaded into the dataset"),
            registry
        )?;

        let dataset_sources_skipped = register_counter_with_registry!(
            Opts::new(
                "dataset_sources_skipped_total",
                "Source files skipped during dataset load"
            ),
            registry
        )?;

        Ok(Self {
            registry,
            ask_requests,
            ask_duration,
            dataset_records,
            dataset_sources_skipped,
        })
    }

    /// Get the metrics registry for exporting
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Record an ask request and its duration
    pub fn record_ask(&self, outcome: &str, duration_secs: f64) {
        self.ask_requests.with_label_values(&[outcome]).inc();
        self.ask_duration.observe(duration_secs);
    }

    /// Record dataset load results
    pub fn record_dataset_load(&self, records: usize, skipped_sources: usize) {
        self.dataset_records.set(records as f64);
        for _ in 0..skipped_sources {
            self.dataset_sources_skipped.inc();
        }
    }

    /// Export metrics in Prometheus text format
    pub fn export_prometheus(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.registry.gather();

        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).unwrap_or_default();

        String::from_utf8(buffer).unwrap_or_default()
    }
}
