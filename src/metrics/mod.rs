//! Prometheus metrics for the HTTP layer and the signal engine.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

use crate::models::Outcome;

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub compute_outcomes_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let compute_outcomes_total = IntCounterVec::new(
            Opts::new(
                "astro_compute_outcomes_total",
                "Signal computations by terminal outcome",
            ),
            &["outcome"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(compute_outcomes_total.clone()))?;

        // Pre-create every label so the series exist before the first request.
        for outcome in Outcome::ALL {
            compute_outcomes_total.with_label_values(&[outcome.as_str()]);
        }

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            compute_outcomes_total,
        })
    }

    pub fn record_outcome(&self, outcome: Outcome) {
        self.compute_outcomes_total
            .with_label_values(&[outcome.as_str()])
            .inc();
    }

    /// Render all registered metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
