use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - HTTP requests (count by route/status, latency by route)
// - Customer store failures by operation
//
// Exposed in text format on GET /metrics.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: IntCounterVec,
    pub http_request_duration: HistogramVec,

    // Store Metrics
    pub store_failures_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests handled"),
            &["method", "route", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request latency")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["route"],
        )?;
        registry.register(Box::new(http_request_duration.clone()))?;

        let store_failures_total = IntCounterVec::new(
            Opts::new(
                "customer_store_failures_total",
                "Customer store calls that failed with a storage error",
            ),
            &["operation"],
        )?;
        registry.register(Box::new(store_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration,
            store_failures_total,
        })
    }

    #[cfg(test)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record one handled HTTP request
    pub fn record_http_request(&self, method: &str, route: &str, status: u16, duration_secs: f64) {
        let status = status.to_string();
        self.http_requests_total
            .with_label_values(&[method, route, status.as_str()])
            .inc();
        self.http_request_duration
            .with_label_values(&[route])
            .observe(duration_secs);
    }

    /// Helper to record a failed store call
    pub fn record_store_failure(&self, operation: &str) {
        self.store_failures_total.with_label_values(&[operation]).inc();
    }

    /// Encode every registered metric in the Prometheus text format
    pub fn render(&self) -> anyhow::Result<Vec<u8>> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(buffer)
    }
}
